use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use pasi_core::{update, FlowState, Msg, WidgetConfig};
use widget_logging::{widget_info, widget_warn};

use super::config;
use super::effects::EffectRunner;
use super::input::{parse_command, Command, HELP};
use super::logging;
use super::notify::TerminalNotifier;
use super::ui;

/// Everything the host loop reacts to, serialized through one channel.
pub enum HostEvent {
    Msg(Msg),
    Quit,
}

pub fn run_app(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = config::load(config_path)?;
    logging::initialize(config.log_destination);
    widget_info!("starting widget, analysis mode {:?}", config.analysis.mode);

    let (host_tx, host_rx) = mpsc::channel::<HostEvent>();
    let runner = EffectRunner::new(&config.analysis, host_tx.clone(), Box::new(TerminalNotifier))?;
    spawn_input_reader(host_tx);

    let mut state = FlowState::new();
    print_view(&state, &config.widget);
    println!("{HELP}");

    while let Ok(event) = host_rx.recv() {
        let msg = match event {
            HostEvent::Msg(msg) => msg,
            HostEvent::Quit => break,
        };
        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);
        if state.consume_dirty() {
            print_view(&state, &config.widget);
        }
    }

    widget_info!("widget closed at step {:?}", state.current_step());
    Ok(())
}

fn spawn_input_reader(host_tx: mpsc::Sender<HostEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    widget_warn!("stdin read failed: {}", err);
                    break;
                }
            };
            let event = match parse_command(&line) {
                Command::Msg(msg) => HostEvent::Msg(msg),
                Command::Quit => HostEvent::Quit,
                Command::Unknown(verb) => {
                    println!("unknown command `{verb}`; {HELP}");
                    continue;
                }
            };
            if host_tx.send(event).is_err() {
                return;
            }
        }
        let _ = host_tx.send(HostEvent::Quit);
    });
}

fn print_view(state: &FlowState, widget: &WidgetConfig) {
    for line in ui::render::render(&state.view(widget)) {
        println!("{line}");
    }
}
