fn main() {
    dsroot::app::cli::run();
}
