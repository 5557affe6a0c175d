fn main() {
    let result = tx_populator::run(concat!(
        clap::crate_version!(),
        env!("POPULATOR_GIT_DESCRIPTION")
    ));
    if let Err(e) = result {
        eprintln!("Error {e}");
        std::process::exit(1);
    }
}
