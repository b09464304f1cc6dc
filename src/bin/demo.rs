use rehash_demo::{DemoError, demo};

fn main() -> Result<(), DemoError> {
    env_logger::builder().init();

    let stdout = std::io::stdout();
    demo::run(&mut stdout.lock())
}
