// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor, queue,
    terminal::{Clear, ClearType},
    tty::IsTty,
};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::device::{MetricsSource, SysinfoMetricsSource};
use crate::error::Result;
use crate::ui::{PanelRenderer, PanelStyle};
use crate::view::{data_collector::collect_snapshot, terminal_manager::TerminalManager};

/// Entry point of the binary: validates the arguments, then draws once or
/// keeps refreshing until Ctrl-C.
pub async fn run(cli: &Cli) -> Result<()> {
    // Reject a bad rate before touching the hardware
    let refresh = cli.refresh_interval()?;

    let stdout = io::stdout();
    let renderer = PanelRenderer::new(PanelStyle::for_output(stdout.is_tty()));
    let source = SysinfoMetricsSource::new();
    let mut out = stdout.lock();

    if !cli.watch {
        return run_once(&source, &renderer, &mut out).await;
    }

    let _terminal = TerminalManager::new();
    tokio::select! {
        result = run_watch(&source, &renderer, refresh, &mut out, None) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted, leaving watch mode");
            Ok(())
        }
    }
}

/// Collects one snapshot and prints the panel.
pub async fn run_once<W: Write>(
    source: &dyn MetricsSource,
    renderer: &PanelRenderer,
    out: &mut W,
) -> Result<()> {
    let snapshot = collect_snapshot(source).await?;
    renderer.write(out, &snapshot)?;
    out.flush()?;
    Ok(())
}

/// Collect, clear, print, sleep; repeated `max_ticks` times or forever.
///
/// A tick starts only after the previous one has been printed and the
/// refresh delay has passed, so renders never overlap.
pub async fn run_watch<W: Write>(
    source: &dyn MetricsSource,
    renderer: &PanelRenderer,
    refresh: Duration,
    out: &mut W,
    max_ticks: Option<u64>,
) -> Result<()> {
    let mut tick = 0u64;
    loop {
        let snapshot = collect_snapshot(source).await?;

        queue!(out, cursor::MoveTo(0, 0), Clear(ClearType::All))?;
        renderer.write(out, &snapshot)?;
        out.flush()?;

        tick += 1;
        debug!("tick {tick} rendered, next in {}s", refresh.as_secs());
        if max_ticks.is_some_and(|max| tick >= max) {
            return Ok(());
        }
        tokio::time::sleep(refresh).await;
    }
}
