fn main() {
    gcp_onboard::app::cli::run();
}
