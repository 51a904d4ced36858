fn main() -> std::io::Result<()> {
    clinara::run()
}
