pub fn main() -> std::process::ExitCode {
    serbench::init::run()
}
