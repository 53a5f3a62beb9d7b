use clap::Parser;
use commute_matrix::app::CommuteApp;

fn main() {
    env_logger::init();
    let args = CommuteApp::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running commute-matrix: {e}");
            std::process::exit(1);
        }
    }
}
