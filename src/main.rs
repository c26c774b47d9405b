use std::io;
use std::process;

use amazons::Controller;
use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = Controller::new(stdin.lock(), stdout.lock());
    if let Err(e) = controller.play() {
        eprintln!("amazons: {e}");
        process::exit(1);
    }
}
