fn main() {
    deploykit::app::cli::run();
}
