pub mod auto_scaling;
