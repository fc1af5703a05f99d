// App state and main event loop.
// Owns the content store, the repo cache, per-tab state, and the
// channel that async tasks report back on.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::config::Config;
use crate::content::ContentStore;
use crate::download;
use crate::email::{self, SendOutcome};
use crate::error::{FolioError, Result as FolioResult};
use crate::github::{GitHubClient, RepoCache, RepoKey, RepoQuery, RepoSummary, fetch_repos};
use crate::state::{
    ContactFormState, CvModalState, JourneyState, LoadingState, MissionsState, ProjectsState,
    SubmitDisposition, Typewriter,
};
use crate::theme::Theme;
use crate::ui;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Projects,
    Journey,
    Lab,
    Contact,
    SideMissions,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Projects,
        Tab::Journey,
        Tab::Lab,
        Tab::Contact,
        Tab::SideMissions,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Projects => "Projects",
            Tab::Journey => "Journey",
            Tab::Lab => "Lab",
            Tab::Contact => "Contact",
            Tab::SideMissions => "Side Missions",
        }
    }

    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let i = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which send a finished email task belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailKind {
    Contact,
    CvPassword,
}

/// Completions reported back from spawned tasks.
pub enum AppEvent {
    ReposLoaded {
        generation: u64,
        result: FolioResult<Vec<RepoSummary>>,
    },
    EmailFinished {
        kind: EmailKind,
        outcome: SendOutcome,
    },
    CvSaved {
        result: FolioResult<PathBuf>,
    },
}

/// Main application state.
pub struct App {
    pub active_tab: Tab,
    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub content: ContentStore,
    pub config: Config,
    pub typewriter: Typewriter,
    pub projects: ProjectsState,
    pub journey: JourneyState,
    pub missions: MissionsState,
    pub contact: ContactFormState,
    pub cv: CvModalState,
    /// Session cache of filtered repo listings, keyed by fetch params.
    repo_cache: RepoCache,
    github: GitHubClient,
    /// Plain client for email dispatch and the CV download.
    http: reqwest::Client,
    tx: UnboundedSender<AppEvent>,
    rx: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(content: ContentStore, config: Config) -> FolioResult<Self> {
        let github = GitHubClient::new(config.github_token.as_deref())?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FolioError::Connection)?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            active_tab: Tab::default(),
            should_quit: false,
            show_help: false,
            theme: Theme::default(),
            content,
            config,
            typewriter: Typewriter::new(),
            projects: ProjectsState::new(),
            journey: JourneyState::new(),
            missions: MissionsState::new(),
            contact: ContactFormState::new(),
            cv: CvModalState::new(),
            repo_cache: RepoCache::new(),
            github,
            http,
            tx,
            rx,
        })
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
            self.drain_task_events();
            self.tick();
        }
        self.missions.abort_inflight();
        Ok(())
    }

    /// Handle keyboard events with a short poll so ticks keep flowing.
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Apply completions from spawned tasks.
    fn drain_task_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            match event {
                AppEvent::ReposLoaded { generation, result } => {
                    self.on_repos_loaded(generation, result);
                }
                AppEvent::EmailFinished { kind, outcome } => match kind {
                    EmailKind::Contact => {
                        self.contact.submitting = false;
                        if outcome.success {
                            self.contact.clear_fields();
                        }
                        self.contact.status = Some(outcome);
                    }
                    EmailKind::CvPassword => self.cv.finish_email(outcome),
                },
                AppEvent::CvSaved { result } => {
                    self.cv.finish_download(result.map_err(|e| e.to_string()));
                }
            }
        }
    }

    /// Per-frame updates: advance the hero typewriter.
    fn tick(&mut self) {
        if self.active_tab == Tab::Dashboard {
            let one_liner = self.content.hero().one_liner.clone();
            self.typewriter.tick(&one_liner);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        if self.cv.open {
            self.handle_cv_key(key);
            return;
        }

        match key.code {
            KeyCode::Tab => self.set_tab(self.active_tab.next()),
            KeyCode::BackTab => self.set_tab(self.active_tab.prev()),
            _ => match self.active_tab {
                Tab::Dashboard => self.handle_global_key(key),
                Tab::Projects => self.handle_projects_key(key),
                Tab::Journey => self.handle_journey_key(key),
                Tab::Lab => self.handle_lab_key(key),
                Tab::Contact => self.handle_contact_key(key),
                Tab::SideMissions => self.handle_missions_key(key),
            },
        }
    }

    /// Keys available on tabs without text entry.
    fn handle_global_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            _ => {}
        }
    }

    fn handle_projects_key(&mut self, key: KeyEvent) {
        let len = self.content.major_projects().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.projects.select_prev(len),
            KeyCode::Down | KeyCode::Char('j') => self.projects.select_next(len),
            KeyCode::Enter => self.projects.open_detail(),
            KeyCode::Esc => {
                self.projects.close_detail();
            }
            _ => self.handle_global_key(key),
        }
    }

    fn handle_journey_key(&mut self, key: KeyEvent) {
        let len = self.content.journey().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.journey.select_prev(len),
            KeyCode::Down | KeyCode::Char('j') => self.journey.select_next(len),
            _ => self.handle_global_key(key),
        }
    }

    fn handle_lab_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.theme.shift_hue(-10),
            KeyCode::Right | KeyCode::Char('l') => self.theme.shift_hue(10),
            KeyCode::Char('t') => self.theme.toggle_mode(),
            KeyCode::Char('a') => self.typewriter.reset(),
            _ => self.handle_global_key(key),
        }
    }

    /// Contact tab: printable characters go to the focused field, so the
    /// global single-letter shortcuts do not apply here.
    fn handle_contact_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('d') {
                self.open_cv_modal();
            }
            return;
        }
        match key.code {
            KeyCode::Up => self.contact.focus_prev(),
            KeyCode::Down => self.contact.focus_next(),
            KeyCode::Backspace => self.contact.backspace(),
            KeyCode::Enter => self.submit_contact(),
            KeyCode::Char(c) => self.contact.input(c),
            _ => {}
        }
    }

    fn handle_missions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.missions.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.missions.select_next(),
            KeyCode::Left | KeyCode::Char('p') => self.missions.prev_page(),
            KeyCode::Right | KeyCode::Char('n') => self.missions.next_page(),
            KeyCode::Char('r') => self.start_missions_fetch(true),
            _ => self.handle_global_key(key),
        }
    }

    fn handle_cv_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.cv.close(),
            KeyCode::Enter => self.confirm_cv_download(),
            KeyCode::Backspace => self.cv.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cv.input(c);
            }
            _ => {}
        }
    }

    /// Switch tabs. Leaving Side Missions mid-fetch cancels the request;
    /// entering it kicks one off if nothing is loaded yet.
    fn set_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        if self.active_tab == Tab::SideMissions && self.missions.data.is_loading() {
            // Invalidate the generation too: the task may already have
            // queued its completion before the abort lands.
            self.missions.cancel();
            self.missions.data = LoadingState::Idle;
        }
        self.active_tab = tab;
        if tab == Tab::SideMissions && matches!(self.missions.data, LoadingState::Idle) {
            self.start_missions_fetch(false);
        }
    }

    /// Start a repo listing fetch, serving from the cache when fresh.
    fn start_missions_fetch(&mut self, force: bool) {
        let github = self.content.config().github.clone();
        if github.username.is_empty() {
            self.missions
                .set_error("GitHub account is not configured".to_string());
            return;
        }

        let query = RepoQuery {
            username: github.username,
            per_page: github.per_page,
            exclude_topics: github.exclude_topics,
        };
        let key = query.cache_key();

        if !force {
            if let Some(repos) = self.repo_cache.get_fresh(&key) {
                let repos = repos.to_vec();
                // Supersede any in-flight request before applying the hit.
                self.missions.begin_fetch();
                self.missions.set_loaded(repos);
                return;
            }
        }

        let generation = self.missions.begin_fetch();
        let client = self.github.clone();
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            let result = fetch_repos(&client, &query).await;
            let _ = tx.send(AppEvent::ReposLoaded { generation, result });
        });
        self.missions.attach_task(task);
    }

    fn on_repos_loaded(&mut self, generation: u64, result: FolioResult<Vec<RepoSummary>>) {
        // A superseded fetch must not touch state, success or failure.
        if !self.missions.accepts(generation) {
            return;
        }
        match result {
            Ok(repos) => {
                let github = &self.content.config().github;
                let key = RepoKey::new(&github.username, github.per_page, &github.exclude_topics);
                self.repo_cache.insert(key, repos.clone());
                self.missions.set_loaded(repos);
            }
            Err(e) => self.missions.set_error(e.to_string()),
        }
    }

    fn submit_contact(&mut self) {
        match self.contact.disposition() {
            SubmitDisposition::Incomplete => {}
            SubmitDisposition::HoneypotTriggered => {
                // Bots get a convincing success and nothing is dispatched.
                self.contact.status = Some(SendOutcome::success("Message sent successfully!"));
                self.contact.clear_fields();
            }
            SubmitDisposition::Ready(message) => {
                let Some(config) = self.config.email.clone() else {
                    self.contact.status =
                        Some(SendOutcome::failure("Email delivery is not configured."));
                    return;
                };
                self.contact.submitting = true;
                self.contact.status = None;

                let client = self.http.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let outcome = email::send_contact(&client, &config, &message).await;
                    let _ = tx.send(AppEvent::EmailFinished {
                        kind: EmailKind::Contact,
                        outcome,
                    });
                });
            }
        }
    }

    fn open_cv_modal(&mut self) {
        if self.content.contact().cv_url.is_some() {
            self.cv.open();
        }
    }

    /// Kick off the password email and the download as independent
    /// tasks. The download never waits on the email outcome.
    fn confirm_cv_download(&mut self) {
        if !self.cv.can_submit() {
            return;
        }
        let Some(cv_url) = self.content.contact().cv_url.clone() else {
            return;
        };
        let recipient = self.cv.email.trim().to_string();
        self.cv.busy = true;
        self.cv.email_outcome = None;
        self.cv.download_result = None;

        match self.config.email.clone() {
            Some(config) => {
                let client = self.http.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let outcome = email::send_cv_password(&client, &config, &recipient).await;
                    let _ = tx.send(AppEvent::EmailFinished {
                        kind: EmailKind::CvPassword,
                        outcome,
                    });
                });
            }
            None => self
                .cv
                .finish_email(SendOutcome::failure("CV password email is not configured.")),
        }

        let client = self.http.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = download::download_cv(&client, &cv_url, &download::download_dir()).await;
            let _ = tx.send(AppEvent::CvSaved { result });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_leaving_missions_discards_queued_completion() {
        let content = ContentStore::load().unwrap();
        let mut app = App::new(content, Config::default()).unwrap();

        app.active_tab = Tab::SideMissions;
        let generation = app.missions.begin_fetch();

        // The completion lands on the channel before the user switches
        // away; it must not resurrect state afterwards.
        app.tx
            .send(AppEvent::ReposLoaded {
                generation,
                result: Ok(Vec::new()),
            })
            .unwrap();

        app.set_tab(Tab::Dashboard);
        app.drain_task_events();

        assert!(matches!(app.missions.data, LoadingState::Idle));
    }

    #[test]
    fn test_tab_cycle() {
        let mut tab = Tab::Dashboard;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Dashboard);

        assert_eq!(Tab::Dashboard.prev(), Tab::SideMissions);
        assert_eq!(Tab::SideMissions.next(), Tab::Dashboard);
    }

    #[test]
    fn test_tab_titles_are_distinct() {
        let titles: std::collections::HashSet<_> =
            Tab::ALL.iter().map(|t| t.title()).collect();
        assert_eq!(titles.len(), Tab::ALL.len());
    }
}
