use std::io::{BufRead, Write};

use mint_widget::command::{Command, HELP};
use mint_widget::config::host_local_offset;
use mint_widget::{Shell, Snapshot, WIDGET_CONTAINER_ID, WidgetConfig, WidgetContext};
use time::UtcOffset;
use tokio::sync::{mpsc, watch};

fn main() -> std::io::Result<()> {
    // The local offset can only be read while the process is single-threaded.
    let host_offset = host_local_offset();
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(host_offset));
    Ok(())
}

async fn run(host_offset: UtcOffset) {
    tracing_subscriber::fmt::init();

    // A bad zones file is non-fatal: the widget runs with the built-in zones.
    let base = WidgetConfig::from_env_default_zones(host_offset);
    let config = match base.clone().with_zones_from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "zones config invalid, using built-in zones");
            base
        }
    };

    let mut shell = Shell::new().with_container(WIDGET_CONTAINER_ID);
    let Some(widget) = shell.mount(WidgetContext::new(config)) else {
        return;
    };
    let render = tokio::spawn(render_loop(widget.subscribe()));
    print_line(HELP);

    let mut lines = spawn_stdin_reader();
    loop {
        let line = tokio::select! {
            line = lines.recv() => line,
            _ = tokio::signal::ctrl_c() => break,
        };
        let Some(line) = line else {
            break;
        };
        let Some(command) = Command::parse(&line) else {
            continue;
        };
        let Some(widget) = shell.widget(WIDGET_CONTAINER_ID) else {
            break;
        };

        let result = match command {
            Command::SetDate(raw) => widget.set_date(raw),
            Command::SetTime(raw) => widget.set_time(raw),
            Command::Print => widget.print().await.map(|_| ()),
            Command::Zones => {
                print_line(&render_line(&widget.snapshot()));
                Ok(())
            }
            Command::Help => {
                print_line(HELP);
                Ok(())
            }
            Command::Quit => break,
        };
        if let Err(e) = result {
            tracing::error!(session_id = %widget.session_id(), error = %e, "widget command failed");
            break;
        }
    }

    shell.unmount(WIDGET_CONTAINER_ID).await;
    let _ = render.await;
}

/// Read stdin on a dedicated thread so a pending read never holds up
/// runtime shutdown. The channel closes on EOF or a read error.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!(error = %e, "stdin read failed");
                    break;
                }
            };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Print the zone line whenever its visible content changes. Ends when the
/// widget is unmounted and the snapshot channel closes.
async fn render_loop(mut snapshots: watch::Receiver<Snapshot>) {
    let mut last = render_line(&snapshots.borrow_and_update());
    print_line(&last);
    while snapshots.changed().await.is_ok() {
        let line = render_line(&snapshots.borrow_and_update());
        if line != last {
            print_line(&line);
            last = line;
        }
    }
}

fn render_line(snapshot: &Snapshot) -> String {
    let zones = snapshot
        .zones
        .iter()
        .map(|zone| format!("{} {}", zone.city, zone.time))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("[{} {}] {zones}", snapshot.selected_date, snapshot.selected_time)
}

fn print_line(line: &str) {
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{line}");
    let _ = out.flush();
}
