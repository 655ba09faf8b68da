use plum_checkers::console::game_loop::run_console_loop;

fn main() {
    if let Err(err) = run_console_loop() {
        eprintln!("I/O error: {err}");
        std::process::exit(1);
    }
}
