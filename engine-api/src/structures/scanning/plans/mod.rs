pub mod element_scan;
