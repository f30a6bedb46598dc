fn main() {
    env_logger::init();
    olm_bundle::app::cli::run();
}
