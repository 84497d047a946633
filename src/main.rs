//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! and serves `static/` locally so the demo pages can be opened in a browser.
//!
//! `VIZ_PORT` picks the port (default 8000); `RUST_LOG` the log level.

// Only meaningful on the host; the wasm32 build of this binary is a no-op.
#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::env;
    use std::process::{Command, ExitCode};

    const DEFAULT_PORT: u16 = 8000;

    fn parse_port(raw: Option<&str>) -> u16 {
        match raw {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring VIZ_PORT={raw:?}, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        }
    }

    fn port() -> u16 {
        parse_port(env::var("VIZ_PORT").ok().as_deref())
    }

    fn build_wasm() -> bool {
        log::info!("building WASM pkg …");
        match Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status()
        {
            Ok(st) if st.success() => true,
            Ok(_) => {
                log::error!("wasm-pack finished with errors");
                false
            }
            Err(_) => {
                // The pages still load whatever is already in static/pkg.
                log::warn!("wasm-pack not found in PATH, serving existing artifacts");
                true
            }
        }
    }

    pub fn run() -> ExitCode {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        if !build_wasm() {
            return ExitCode::FAILURE;
        }

        let port = port();
        log::info!("serving static/ at http://127.0.0.1:{port}");
        let status = Command::new("python3")
            .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
            .status();

        match status {
            Ok(st) if st.success() => ExitCode::SUCCESS,
            Ok(st) => {
                log::error!("http server exited with {st}");
                ExitCode::FAILURE
            }
            Err(err) => {
                log::error!("failed to start http server: {err}");
                ExitCode::FAILURE
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn port_falls_back_to_default() {
            assert_eq!(parse_port(None), DEFAULT_PORT);
            assert_eq!(parse_port(Some("9000")), 9000);
            assert_eq!(parse_port(Some(" 8080 ")), 8080);
            assert_eq!(parse_port(Some("http")), DEFAULT_PORT);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    host::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
