use crate::source::{RecordSource, StaticRecordSource};
use crate::ui::Msg;
use crate::ui::model::{LoadFinished, LoadTask, Screen, initial_screen};
use crate::ui::render::card_text;
use anyhow::{Context, Result, anyhow};
use bubbletea_rs::{
    Program, command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel,
};
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::OnceCell;
use std::sync::Arc;

// Program::init takes no arguments, so the source is parked here before the program starts.
static SOURCE: OnceCell<Arc<dyn RecordSource>> = OnceCell::new();

// Drive a load task on the program's runtime and feed its result back as a message.
fn load_cmd(task: LoadTask) -> Cmd {
    Box::pin(async move { task.await.map(|done| Box::new(done) as bubbletea_rs::event::Msg) })
}

// Falls back to an empty directory, loudly, if `run` did not park a source.
fn configured_source() -> Arc<dyn RecordSource> {
    SOURCE.get().cloned().unwrap_or_else(|| {
        tracing::warn!("no record source configured; showing an empty directory");
        Arc::new(StaticRecordSource::default())
    })
}

// Adapter type implementing bubbletea-rs Model trait by delegating to our Screen
struct TeaAdapter {
    inner: Screen,
}

impl TeaAdapter {
    fn quit(&mut self) -> Option<Cmd> {
        self.inner.unmount();
        Some(bubbletea_rs::quit())
    }
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let mut inner = initial_screen(configured_source());
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        inner.update(Msg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        let task = inner.initialize();
        (TeaAdapter { inner }, Some(load_cmd(task)))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        let msg = match msg.downcast::<LoadFinished>() {
            Ok(done) => {
                self.inner.update(Msg::Loaded(*done));
                return None;
            }
            Err(other) => other,
        };
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            // Normalize and handle global quit keys first for reliability across terminals:
            match &km.key {
                KeyCode::Esc | KeyCode::Char('\u{1b}') => {
                    if !self.inner.captures_esc() {
                        return self.quit();
                    }
                    self.inner.update(Msg::KeyEsc);
                    return None;
                }
                // Ctrl-C delivered as ETX
                KeyCode::Char('\u{03}') => return self.quit(),
                KeyCode::Char('c' | 'C') if km.modifiers.contains(KeyModifiers::CONTROL) => {
                    return self.quit();
                }
                _ => {}
            }

            match &km.key {
                KeyCode::Enter => self.inner.update(Msg::KeyEnter),
                KeyCode::Backspace => self.inner.update(Msg::KeyBackspace),
                KeyCode::Tab => self.inner.update(Msg::KeyTab),
                KeyCode::Up => self.inner.update(Msg::KeyUp),
                KeyCode::Down => self.inner.update(Msg::KeyDown),
                KeyCode::Char(ch) => {
                    if km.modifiers.contains(KeyModifiers::CONTROL) {
                        match ch {
                            'n' | 'N' => self.inner.update(Msg::KeyDown),
                            'p' | 'P' => self.inner.update(Msg::KeyUp),
                            _ => {}
                        }
                    } else {
                        self.inner.update(Msg::Rune(*ch));
                    }
                }
                _ => { /* ignore other keys */ }
            }
            return None;
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            self.inner.update(Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
            return None;
        }
        None
    }

    fn view(&self) -> String {
        self.inner.render_full()
    }
}

/// Runs the interactive screen until the user quits.
pub async fn run(source: Arc<dyn RecordSource>) -> Result<()> {
    SOURCE
        .set(source)
        .map_err(|_| anyhow!("interactive screen already started"))?;
    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true);
    let program = builder
        .build()
        .map_err(|e| anyhow!("failed to build program: {e:?}"))?;
    let mut final_adapter = program
        .run()
        .await
        .map_err(|e| anyhow!("program error: {e:?}"))?;
    final_adapter.inner.unmount();
    Ok(())
}

/// One-shot listing: fetches once and returns the cards as plain text.
pub async fn print_records(source: &dyn RecordSource, power: Option<&str>) -> Result<String> {
    let records = match power {
        Some(p) => source
            .fetch_by_power(p)
            .await
            .with_context(|| format!("failed to fetch superheroes with power {p}"))?,
        None => source
            .fetch_all()
            .await
            .context("failed to fetch superheroes")?,
    };
    tracing::info!(count = records.len(), "fetched records");
    Ok(records
        .iter()
        .map(card_text)
        .collect::<Vec<_>>()
        .join("\n\n"))
}
