use std::time::Duration;

use iced::widget::{button, column, container, scrollable, text};
use iced::{time, Alignment, Element, Length, Subscription, Task, Theme};

mod api;
mod state;
mod ui;

use api::FetchError;
use state::dashboard::{Applied, DashboardState};
use state::data::Employee;

/// Fixed auto-refresh period
const REFRESH_INTERVAL: Duration = Duration::from_millis(30_000);

/// Main application state
struct Dashboard {
    /// Snapshot of fetch status and employee data
    state: DashboardState,
    /// Shared HTTP client, cloned into each fetch task
    http: reqwest::Client,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// A refresh was requested (the "Refresh Data" button or the timer)
    Refresh,
    /// A fetch cycle finished; `seq` is the token handed out when it started
    EmployeesFetched {
        seq: u64,
        result: Result<Vec<Employee>, FetchError>,
    },
}

impl Dashboard {
    /// Create a new instance and start the first fetch immediately
    fn new() -> (Self, Task<Message>) {
        let mut dashboard = Dashboard {
            state: DashboardState::default(),
            http: reqwest::Client::new(),
        };

        println!(
            "👥 Employee dashboard started, polling {}{} every {}s",
            api::SERVER_BASE,
            api::USERS_ENDPOINT,
            REFRESH_INTERVAL.as_secs()
        );

        let initial_fetch = dashboard.start_fetch();
        (dashboard, initial_fetch)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Refresh => self.start_fetch(),
            Message::EmployeesFetched { seq, result } => {
                let failure = result.as_ref().err().map(|e| e.to_string());

                match self.state.apply_fetch_result(seq, result) {
                    Applied::Current => {
                        if let Some(detail) = failure {
                            eprintln!("⚠️  Employee fetch failed: {}", detail);
                        }
                    }
                    Applied::Stale => {
                        eprintln!("⚠️  Ignoring stale fetch result (cycle {})", seq);
                    }
                }

                Task::none()
            }
        }
    }

    /// Begin one fetch cycle, unless one is already outstanding
    fn start_fetch(&mut self) -> Task<Message> {
        match self.state.begin_fetch() {
            Some(seq) => {
                let client = self.http.clone();
                Task::perform(
                    async move { api::fetch_employees(&client, api::SERVER_BASE).await },
                    move |result| Message::EmployeesFetched { seq, result },
                )
            }
            // A cycle is already in flight; the trigger is coalesced into it
            None => Task::none(),
        }
    }

    /// The 30-second auto-refresh timer, owned and torn down by the runtime
    fn subscription(&self) -> Subscription<Message> {
        time::every(REFRESH_INTERVAL).map(|_| Message::Refresh)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content = column![text("Employee Details Dashboard").size(36)]
            .spacing(20)
            .padding(30)
            .align_x(Alignment::Center);

        if let Some(last_updated) = &self.state.last_updated {
            content = content.push(text(format!("Last Updated: {}", last_updated)).size(14));
        }

        content = content.push(button("Refresh Data").on_press(Message::Refresh).padding(10));

        if let Some(error) = &self.state.error {
            content = content.push(text(error).style(text::danger));
        }

        if self.state.loading {
            content = content.push(text("Loading employee data..."));
        } else {
            content = content.push(ui::cards::employee_grid(&self.state.employees));
        }

        scrollable(container(content).width(Length::Fill).center_x(Length::Fill)).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Employee Dashboard", Dashboard::update, Dashboard::view)
        .subscription(Dashboard::subscription)
        .theme(Dashboard::theme)
        .centered()
        .run_with(Dashboard::new)
}
