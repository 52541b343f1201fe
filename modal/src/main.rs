use clap::Parser;
use modal::app::ModalApp;

fn main() {
    env_logger::init();
    let args = ModalApp::parse();
    log::debug!("running {:?}", args.op);
    if let Err(e) = args.op.run() {
        log::error!("modal failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
