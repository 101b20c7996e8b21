pub mod boolean_operator;
pub mod constraint_node;
pub mod constraint_node_finalized;
pub mod constraint_wire;
pub mod scan_constraint;
pub mod scan_constraint_finalized;
