mod command;
mod input;
mod output;

fn main() -> anyhow::Result<()> {
    command::run()
}
