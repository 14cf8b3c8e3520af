use congo_engine::protocol::command_loop::{run_stdio_loop, CommandLoopConfig};

fn main() -> std::io::Result<()> {
    env_logger::init();
    run_stdio_loop(CommandLoopConfig::default())
}
