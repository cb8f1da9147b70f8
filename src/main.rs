fn main() -> std::process::ExitCode {
    basic::term::main()
}
