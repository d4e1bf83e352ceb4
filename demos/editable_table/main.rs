//! Editable table demo.
//!
//! Run with `cargo run` from this directory. Set `DATAGRID_LOG=grid.log` to
//! write logs to a file; `RUST_LOG` controls the level.

use bubbletea_datagrid::prelude::*;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

struct App {
    grid: DataGrid,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut grid = DataGrid::new().with_width(90);
        let cmd = grid.focus();
        (Self { grid }, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(k) = msg.downcast_ref::<KeyMsg>() {
            if k.key == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
                self.grid.blur();
                return Some(quit());
            }
        }
        self.grid.update(msg)
    }

    fn view(&self) -> String {
        let title = Style::new()
            .bold(true)
            .foreground(Color::from("63"))
            .render("Editable table");
        format!("{}\n\n{}\n\nctrl+c to quit\n", title, self.grid.view())
    }
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(path) = std::env::var("DATAGRID_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let program = Program::<App>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()?;
    let app = program.run().await?;

    for (i, row) in app.grid.rows().iter().enumerate() {
        println!("{:>2}  {:<16} {:<16} {}", i, row.one, row.two, row.three);
    }
    Ok(())
}
