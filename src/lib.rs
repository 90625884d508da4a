//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# levelog

levelog is a minimal leveled logger.

# The levels

| Name       | Value | Token     |
|------------|-------|-----------|
| FATAL      | -4    | `fatal`   |
| ERROR      | -3    | `error`   |
| WARNING    | -2    | `warning` |
| INFO       | -1    | `info`    |
| DEBUG      | 0     | `debug0`  |
| VDEBUG     | 1     | `debug1`  |
| VVDEBUG    | 2     | `debug2`  |
| VVVDEBUG   | 3     | `debug3`  |

Smaller is more urgent.  A logger with threshold `T` writes a message at level `L` when `L <= T`.
The tokens are used in headers and, with the `serde` feature (on by default), as the serialized
form of [Level], so levels can sit in configuration files:

```rust
# #[cfg(feature = "serde")] {
#[derive(serde::Deserialize)]
struct Config {
    log_level: levelog::Level,
}
let config: Config = serde_json::from_str(r#"{"log_level":"vdebug"}"#).unwrap();
assert_eq!(config.log_level, levelog::Level::VDEBUG);
# }
```

# The output

Each message is written as one line:

```text
24/03/09 07:05:03.000042 main.rs:17] warning: disk 93% full
```

The date and time are local, the file and line are those of the logging call.

# The API

There is a process-wide default logger (threshold INFO, writing to stderr) behind free functions
and macros, and [Logger] for callers who want their own threshold or sink.

```rust
levelog::info!("connected to", "db01");
levelog::errorf!("retrying in {}s", 5);

let sink = levelog::InMemorySink::new();
let logger = levelog::Logger::with_output(levelog::Level::DEBUG, sink.clone());
logger.debugf(format_args!("cache hit ratio {:.2}", 0.97));
assert!(sink.drain_logs().ends_with("] debug0: cache hit ratio 0.97\n"));
```

`fatal` and `fatalf` log and then exit the process with status 1, whatever the threshold.

# Multithreading

Loggers are `Send + Sync`.  Each header and its message are written under the logger's lock, so
concurrent messages never interleave.
*/

mod level;
mod header;
mod logger;
mod inmemory_sink;
pub mod global_logger;
mod macros;

pub use level::{Level, ParseLevelError};
pub use header::CallSite;
pub use logger::Logger;
pub use inmemory_sink::InMemorySink;
pub use global_logger::{
    debug, debugf, default_logger, error, errorf, fatal, fatalf, info, infof, level, set_level,
    set_output, vdebug, vdebugf, vvdebug, vvdebugf, vvvdebug, vvvdebugf, warning, warningf,
};
