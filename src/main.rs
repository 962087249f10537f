//! online-confgen: render proxy configs and convert quiz data
//!
//! `render` turns `RUN_DIR/config/<name>.json` into `nginx.conf` and
//! `haproxy.cfg`; `convert` turns `problems.csv` into `problems.json`.

use anyhow::Result;

fn main() -> Result<()> {
    online_confgen::cli::run()
}
