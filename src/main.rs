use std::process::ExitCode;

use clap::Parser;
use humid_air_toolbox::{app, ui_cli::Cli};

/// 프로그램의 엔트리 포인트. 인자를 해석한 뒤 한 번 계산하고 종료한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match app::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            app::report_failure(&err);
            ExitCode::FAILURE
        }
    }
}
