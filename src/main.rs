use clap::Parser;

mod cmd;
mod matrix;
mod municipality;
mod render;
mod tax;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let command = cmd::ReportCommand::parse();
    command.exec()
}
