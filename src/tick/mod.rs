pub mod fov_tick;
