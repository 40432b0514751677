//! Piece manager runner (default binary).
//!
//! Reads one menu code (or action name) per line from stdin and answers with
//! either the text view or line-delimited JSON, depending on `PIECES_OUTPUT`.

mod config;

use std::io::{self, Write};

use anyhow::Result;

use tetris_reserve::adapter::{build_observation, build_result, to_json_line, Journal};
use tetris_reserve::core::Snapshot;
use tetris_reserve::engine::{ActionEvent, ActionResult, PieceManager};
use tetris_reserve::input::{Choice, LineInput};
use tetris_reserve::term::{render_menu, StateView, TextRenderer, BANNER};
use tetris_reserve::types::MenuAction;

use config::{DriverConfig, OutputMode};

fn main() -> Result<()> {
    let config = DriverConfig::from_env();
    for warning in &config.warnings {
        eprintln!("[Driver] {}", warning);
    }

    let journal = config.log_path.as_deref().and_then(|path| match Journal::open(path) {
        Ok(journal) => {
            eprintln!("[Journal] Appending to {}", path);
            Some(journal)
        }
        Err(e) => {
            eprintln!("[Journal] Disabled: {:#}", e);
            None
        }
    });

    let mut driver = Driver::new(
        PieceManager::with_seed(config.seed),
        TextRenderer::stdout(),
        &config,
        journal,
    );

    let stdin = io::stdin();
    let mut input = LineInput::new(stdin.lock());
    run(&mut driver, &mut input)
}

fn run<W: Write, R: io::BufRead>(driver: &mut Driver<W>, input: &mut LineInput<R>) -> Result<()> {
    driver.start()?;
    loop {
        driver.prompt()?;
        let Some(choice) = input.next_choice()? else {
            // End of input quits like code 0.
            driver.handle(&Choice::Code(MenuAction::Quit.code()))?;
            return Ok(());
        };
        if !driver.handle(&choice)? {
            return Ok(());
        }
    }
}

struct Driver<W: Write> {
    manager: PieceManager,
    renderer: TextRenderer<W>,
    view: StateView,
    output: OutputMode,
    journal: Option<Journal>,
    snap: Snapshot,
    text: String,
    seq: u64,
}

impl<W: Write> Driver<W> {
    fn new(
        manager: PieceManager,
        renderer: TextRenderer<W>,
        config: &DriverConfig,
        journal: Option<Journal>,
    ) -> Self {
        Self {
            manager,
            renderer,
            view: StateView::new(config.color),
            output: config.output,
            journal,
            snap: Snapshot::default(),
            text: String::with_capacity(1024),
            seq: 0,
        }
    }

    /// Banner and initial state.
    fn start(&mut self) -> Result<()> {
        self.manager.snapshot_into(&mut self.snap);
        match self.output {
            OutputMode::Text => {
                self.text.clear();
                self.text.push_str(BANNER);
                self.text.push('\n');
                self.view.render_snapshot(&self.snap, &mut self.text);
                self.renderer.write(&self.text)?;
            }
            OutputMode::Json => {
                let obs = build_observation(self.seq, &self.snap);
                self.renderer.write(&to_json_line(&obs)?)?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        if self.output == OutputMode::Text {
            self.text.clear();
            render_menu(&mut self.text);
            self.renderer.write(&self.text)?;
        }
        Ok(())
    }

    /// Perform one request. Returns `false` once the driver should stop.
    fn handle(&mut self, choice: &Choice) -> Result<bool> {
        let result = match choice {
            Choice::Code(code) => self.manager.perform(*code),
            Choice::Unrecognized(text) => ActionResult::unrecognized(text),
            Choice::Blank => return Ok(true),
        };
        self.seq += 1;
        if let Some(warning) = result.warning {
            eprintln!("[Driver] {}", warning);
        }
        self.manager.snapshot_into(&mut self.snap);

        match self.output {
            OutputMode::Text => self.show_text(&result)?,
            OutputMode::Json => {
                let msg = build_result(self.seq, &result);
                self.renderer.write(&to_json_line(&msg)?)?;
                let obs = build_observation(self.seq, &self.snap);
                self.renderer.write(&to_json_line(&obs)?)?;
            }
        }
        self.journal_record(&result);

        Ok(!result.is_quit())
    }

    fn show_text(&mut self, result: &ActionResult) -> Result<()> {
        self.text.clear();
        if result.outcome != Ok(ActionEvent::Shown) {
            self.view.render_result(result, &mut self.text);
        }
        // State follows every known action except quit.
        if result.action.is_some() && !result.is_quit() {
            self.view.render_snapshot(&self.snap, &mut self.text);
        }
        self.renderer.write(&self.text)
    }

    fn journal_record(&mut self, result: &ActionResult) {
        let Some(journal) = self.journal.as_mut() else {
            return;
        };
        let outcome = journal
            .record(&build_result(self.seq, result))
            .and_then(|_| journal.record(&build_observation(self.seq, &self.snap)));
        if let Err(e) = outcome {
            eprintln!(
                "[Journal] Write to {} failed, disabling: {:#}",
                journal.path().display(),
                e
            );
            self.journal = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetris_reserve::types::QUEUE_CAPACITY;

    fn text_config() -> DriverConfig {
        DriverConfig::from_lookup(|key| (key == "PIECES_SEED").then(|| "7".to_string()), false)
    }

    fn run_script(config: &DriverConfig, script: &str) -> String {
        let mut driver = Driver::new(
            PieceManager::with_seed(config.seed),
            TextRenderer::new(Vec::new()),
            config,
            None,
        );
        let mut input = LineInput::new(script.as_bytes());
        run(&mut driver, &mut input).unwrap();
        String::from_utf8(driver.renderer.into_inner()).unwrap()
    }

    #[test]
    fn text_session() {
        let out = run_script(&text_config(), "1\nabc\n3\n0\n");
        assert!(out.starts_with(BANNER));
        assert!(out.contains("Played: [")); // code 1
        assert!(out.contains("Auto refill: ["));
        assert!(out.contains("Invalid option: abc."));
        assert!(out.contains("Stack empty. Nothing reserved to use."));
        assert!(out.contains("Quitting. Thanks for playing!"));
    }

    #[test]
    fn unrecognized_input_is_echoed_in_json() {
        let config = DriverConfig::from_lookup(
            |key| match key {
                "PIECES_SEED" => Some("7".to_string()),
                "PIECES_OUTPUT" => Some("json".to_string()),
                _ => None,
            },
            false,
        );
        let out = run_script(&config, "zz top\n");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].contains("\"code\":-1"));
        assert!(lines[1].contains("\"message\":\"Invalid option: zz top.\""));
        assert!(lines[1].contains("\"failure\":\"unrecognized_input\""));
        // The invalid line does not end the session; EOF does.
        assert!(lines[3].contains("\"action\":\"quit\""));
    }

    #[test]
    fn eof_quits() {
        let out = run_script(&text_config(), "2\n");
        assert!(out.contains("Reserved on top: ["));
        assert!(out.trim_end().ends_with("Quitting. Thanks for playing!"));
    }

    #[test]
    fn json_session() {
        let config = DriverConfig::from_lookup(
            |key| match key {
                "PIECES_SEED" => Some("7".to_string()),
                "PIECES_OUTPUT" => Some("json".to_string()),
                _ => None,
            },
            false,
        );
        let out = run_script(&config, "reserve\n\n0\n");
        let lines: Vec<&str> = out.lines().collect();
        // initial observation + (result, observation) for reserve and quit
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("\"type\":\"observation\""));
        assert!(lines[1].contains("\"action\":\"reserve\""));
        assert!(lines[2].contains(&format!("\"queue_len\":{}", QUEUE_CAPACITY)));
        assert!(lines[2].contains("\"stack_len\":1"));
        assert!(lines[3].contains("\"action\":\"quit\""));
    }
}
