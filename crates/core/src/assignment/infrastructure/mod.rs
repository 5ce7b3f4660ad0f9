pub mod kuhn_munkres_solver;
