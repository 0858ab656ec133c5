use std::time::Duration;

use api_types::stats::StatsSnapshot;
use chrono_tz::Tz;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use reqwest::Url;
use tokio::sync::mpsc;

use crate::{
    client::{self, ClientError, StatsApi, StatsClient},
    config::AppConfig,
    error::{AppError, Result},
    host::{self, HostContext, TelegramWebApp},
    state::{FetchTicket, Tab, ViewState},
    ui::{self, UiContext, keymap::AppAction},
};

/// Results delivered back to the event loop by background tasks.
#[derive(Debug)]
pub enum AppEvent {
    StatsLoaded(FetchTicket, std::result::Result<StatsSnapshot, ClientError>),
    DeleteFinished(std::result::Result<(), ClientError>),
}

pub struct App {
    client: StatsClient,
    user_id: i64,
    tz: Tz,
    theme: ui::Theme,
    pub state: ViewState,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    tick: usize,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let base_url = client::resolve_base_url(config.api_url.as_deref(), &config.origin)?;
        tracing::info!("using API base {base_url}");

        let mut host = config
            .init_data
            .as_deref()
            .map(TelegramWebApp::from_init_data);
        if let Some(host) = host.as_mut() {
            host::prepare_host(host);
        }

        let local_dev = Url::parse(&config.origin)
            .map(|origin| client::is_local_host(&origin))
            .unwrap_or(false);
        let user_id = host::resolve_user_id(
            host.as_ref().map(|host| host as &dyn HostContext),
            local_dev,
        );

        let theme = ui::Theme::default()
            .with_background(host.as_ref().and_then(TelegramWebApp::background_color));
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Ok(Self {
            client: StatsClient::new(base_url),
            user_id,
            tz: config.tz()?,
            theme,
            state: ViewState::new(),
            events_tx,
            events_rx,
            tick: 0,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        self.start_fetch();
        let result = self.event_loop(&mut terminal).await;
        self.state.teardown();
        ui::restore_terminal(&mut terminal)?;
        result
    }

    /// Fetches in the background so the loading screen keeps animating.
    fn start_fetch(&mut self) {
        let ticket = self.state.begin_fetch();
        let client = self.client.clone();
        let user_id = self.user_id;
        let events_tx = self.events_tx.clone();

        tokio::spawn(async move {
            let result = client.fetch_stats(user_id).await;
            // Receiver is gone once the app has quit.
            let _ = events_tx.send(AppEvent::StatsLoaded(ticket, result));
        });
    }

    /// Sends the delete in the background; the refetch follows once it
    /// reports back.
    fn start_delete(&mut self) {
        if !self.state.begin_delete() {
            return;
        }
        let client = self.client.clone();
        let user_id = self.user_id;
        let events_tx = self.events_tx.clone();

        tokio::spawn(async move {
            let result = client.delete_all_transactions(user_id).await;
            let _ = events_tx.send(AppEvent::DeleteFinished(result));
        });
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(100);

        while !self.should_quit {
            while let Ok(event) = self.events_rx.try_recv() {
                self.handle_event(event);
            }

            let ctx = UiContext {
                theme: self.theme,
                tz: self.tz,
                tick: self.tick,
            };
            terminal
                .draw(|frame| ui::render(frame, &self.state, &ctx))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
            self.tick = self.tick.wrapping_add(1);
        }

        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::StatsLoaded(ticket, result) => {
                self.state.apply_fetch(ticket, result);
            }
            AppEvent::DeleteFinished(result) => {
                if self.state.finish_delete(result) {
                    self.start_fetch();
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let action = ui::keymap::map_key(key);
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        if self.state.notice().is_some() {
            if matches!(action, AppAction::Confirm | AppAction::Cancel) {
                self.state.dismiss_notice();
            }
            return;
        }

        if self.state.delete_confirmation_open() {
            match action {
                AppAction::Confirm | AppAction::Input('y' | 'Y') => self.start_delete(),
                AppAction::Cancel | AppAction::Input('n' | 'N') => self.state.cancel_delete(),
                _ => {}
            }
            return;
        }

        // Tabs and scrolling only mean something once data is shown.
        if self.state.snapshot().is_none() {
            return;
        }

        match action {
            AppAction::Overview | AppAction::Input('a' | 'A') => {
                self.state.select_tab(Tab::Overview);
            }
            AppAction::History | AppAction::Input('t' | 'T') => {
                self.state.select_tab(Tab::History);
            }
            AppAction::ToggleTab => {
                self.state.select_tab(self.state.active_tab().toggled());
            }
            AppAction::Down | AppAction::Input('j') if self.state.active_tab() == Tab::History => {
                self.state.select_next_row();
            }
            AppAction::Up | AppAction::Input('k') if self.state.active_tab() == Tab::History => {
                self.state.select_previous_row();
            }
            AppAction::Input('d' | 'D') if self.state.active_tab() == Tab::History => {
                self.state.request_delete();
            }
            _ => {}
        }
    }
}
