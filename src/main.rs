fn main() {
    zonedir::app::cli::run();
}
