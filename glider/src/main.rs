//! Glider — an interactive Game of Life in the terminal.

mod model;
mod patterns;

use lifegrid_core::app::{App, AppConfig};
use lifegrid_crossterm::CrosstermDriver;

use model::{LifeModel, BOARD_SIZE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = LifeModel::new();
    let driver = CrosstermDriver::new(BOARD_SIZE);
    let mut app = App::new(AppConfig {
        model,
        driver,
        size: BOARD_SIZE,
    });
    app.run()?;
    Ok(())
}
