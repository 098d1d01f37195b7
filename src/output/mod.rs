pub mod plots;
pub mod trajectory_csv;

pub use plots::{plot_speed, plot_trajectory};
pub use trajectory_csv::{write_trajectory, write_trajectory_csv};
