use std::env;

mod cli;

fn main() {
    env_logger::init();

    // Keep generated secrets out of core dumps.
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0)
    };

    cli::run(env::args().collect());
}
