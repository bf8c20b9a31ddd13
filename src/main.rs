fn main() {
    vpack::app::cli::run();
}
