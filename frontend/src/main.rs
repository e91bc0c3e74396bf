fn main() {
    brightside_frontend::run();
}
