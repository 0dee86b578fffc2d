pub use anyhow::{
    Context,
    anyhow,
    bail,
    ensure,
};
pub use paste::paste;
pub use regex::RegexBuilder;
pub use thiserror::Error;

pub type EmptyResult = anyhow::Result<()>;

pub const BUILD_DIR: &str = "/.build/";
pub const CARGO_REGISTRY_DIR: &str = "/.cargo/registry/";
pub const RUSTC_DIR: &str = "/rustc/";

// This macro creates an enum which derives from thiserror::Error, and also
// creates constructor functions in snake case for each of the enum variants.
// The visibility given up front applies to both the enum and the constructors,
// so error kinds that callers in other crates need to match on can be `pub`.
#[macro_export]
macro_rules! err_impl {
    (@hidden $vis:vis $errtype:ident, $item:ident, String) => {
        paste! {
            $vis fn [<$item:snake>](in_: &str) -> anyhow::Error {
                anyhow!{$errtype::$item(in_.into())}
            }
        }
    };

    (@hidden $vis:vis $errtype:ident, $item:ident, $($dtype:tt)::+) => {
        paste! {
            $vis fn [<$item:snake>](in_: &$($dtype)::+) -> anyhow::Error {
                anyhow!{$errtype::$item(in_.clone())}
            }
        }
    };

    ($vis:vis $errtype:ident,
        $(#[$errinfo:meta] $item:ident($($dtype:tt)::+),)+
    ) => {
        #[derive(Debug, Error)]
        $vis enum $errtype {
            $(#[$errinfo] $item($($dtype)::+)),+
        }

        impl $errtype {
            $($crate::err_impl! {@hidden $vis $errtype, $item, $($dtype)::+})+
        }
    };
}

// Logs a fatal error with its full context chain, followed by whatever part of the
// backtrace points into our own code.  Frames from the toolchain, the cargo registry,
// and the build directory are collapsed into "skipped" markers.  Backtraces are only
// captured when RUST_BACKTRACE or RUST_LIB_BACKTRACE is set; otherwise only the
// message is logged.
#[macro_export]
macro_rules! vcderr {
    (@hidden $err:ident, $msg:literal, $($args:expr),*) => {
        let bt = $err.backtrace();
        if bt.status() != std::backtrace::BacktraceStatus::Captured {
            error!(concat!($msg, ": {:#}") $(, $args)*, $err);
        } else {
            let bt = bt.to_string();
            let re = RegexBuilder::new(r"^\s+\d+(?s:.*?)(\s+at\s+.*:\d+)$")
                .multi_line(true)
                .build()
                .expect("backtrace regex is valid");
            let mut skipped_frames = 0;
            let mut filtered_bt = re.find_iter(&bt).fold(String::new(), |mut acc, frame| {
                let frame = frame.as_str();
                if frame.contains(BUILD_DIR) || frame.contains(RUSTC_DIR) || frame.contains(CARGO_REGISTRY_DIR) {
                    skipped_frames += 1;
                } else if !frame.is_empty() {
                    if skipped_frames == 1 {
                        acc += "      -- <skipped 1 frame> --\n";
                    } else if skipped_frames > 1 {
                        acc += &format!("      -- <skipped {skipped_frames} frames> --\n");
                    }
                    acc += &format!("{frame}\n");
                    skipped_frames = 0;
                }
                acc
            });

            if skipped_frames == 1 {
                filtered_bt += "      -- <skipped 1 frame> --";
            } else if skipped_frames > 1 {
                filtered_bt += &format!("      -- <skipped {skipped_frames} frames> --");
            }
            error!(concat!($msg, ": {:#}\n\nPartial Stack Trace:\n\n{}\n\n") $(, $args)*, $err, filtered_bt);
        }
    };

    ($err:ident, $msg:literal) => {
        $crate::vcderr! {@hidden $err, $msg, };
    };

    ($err:ident, $msg:literal, $($args:expr),*) => {
        $crate::vcderr! {@hidden $err, $msg, $($args),*};
    };
}

pub use {
    err_impl,
    vcderr,
};
