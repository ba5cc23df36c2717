pub mod view;
pub mod orbit_vis2d;
