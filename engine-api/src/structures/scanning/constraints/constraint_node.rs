use crate::structures::scanning::constraints::boolean_operator::BooleanOperator;
use crate::structures::scanning::constraints::scan_constraint::ScanConstraint;

/// A constraint tree: typed leaf predicates combined by AND/OR/XOR interior nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstraintNode {
    Leaf(ScanConstraint),
    Operation {
        operator: BooleanOperator,
        left: Box<ConstraintNode>,
        right: Box<ConstraintNode>,
    },
}

impl ConstraintNode {
    pub fn leaf(scan_constraint: ScanConstraint) -> Self {
        ConstraintNode::Leaf(scan_constraint)
    }

    pub fn operation(
        operator: BooleanOperator,
        left: ConstraintNode,
        right: ConstraintNode,
    ) -> Self {
        ConstraintNode::Operation {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// True if any leaf reachable from this node is a relative or delta kind, so the driver knows
    /// to sample previous values at all. This does not require every leaf to agree: a tree mixing
    /// relative and immediate leaves still reports `true` here. That mix is rejected separately,
    /// once the tree is finalized, by `ConstraintNodeFinalized::has_uniform_relativity`.
    pub fn is_relative(&self) -> bool {
        match self {
            ConstraintNode::Leaf(scan_constraint) => scan_constraint.is_relative(),
            ConstraintNode::Operation { left, right, .. } => left.is_relative() || right.is_relative(),
        }
    }

    pub fn for_each_leaf<'a, F: FnMut(&'a ScanConstraint)>(
        &'a self,
        visit: &mut F,
    ) {
        match self {
            ConstraintNode::Leaf(scan_constraint) => visit(scan_constraint),
            ConstraintNode::Operation { left, right, .. } => {
                left.for_each_leaf(visit);
                right.for_each_leaf(visit);
            }
        }
    }
}
