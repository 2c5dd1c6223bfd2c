pub mod element_grid;
