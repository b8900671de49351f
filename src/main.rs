use std::env;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use chrono::Local;
use config::Config;
use dotenvy::dotenv;

use clinic_dashboard::api::ApiClient;
use clinic_dashboard::calendar::{CalendarCell, DAY_NAMES, MonthView};
use clinic_dashboard::domain::types::format_phone;
use clinic_dashboard::dto::appointments::AppointmentRow;
use clinic_dashboard::list::{ApplyOutcome, ListConfig, ListController};
use clinic_dashboard::models::config::DashboardConfig;
use clinic_dashboard::pagination::ListResponse;
use clinic_dashboard::repository::{ListParams, RestRepository};
use clinic_dashboard::services::{
    ServiceResult, appointments, dashboard, dentists, patients, settings,
};
use clinic_dashboard::session::Session;
use clinic_dashboard::store::LocalStore;

const USAGE: &str = "\
usage: clinic-dashboard <patients|dentists|appointments> [page] [search]
       clinic-dashboard stats
       clinic-dashboard calendar [year month]
       clinic-dashboard plans";

fn load_config() -> Result<DashboardConfig, config::ConfigError> {
    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()?
        .try_deserialize()
}

/// Page number and search term from the trailing arguments.
fn list_args(args: &[String]) -> (usize, String) {
    let page = args
        .first()
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(1);
    let search = args.get(1).cloned().unwrap_or_default();
    (page, search)
}

/// Drives one controller through search and page navigation, then prints it.
async fn show_list<T, F, Fut>(
    mut controller: ListController<T>,
    args: &[String],
    fetch: F,
    line: impl Fn(&T) -> String,
) where
    F: Fn(ListParams) -> Fut,
    Fut: Future<Output = ServiceResult<ListResponse<T>>>,
{
    let (page, search) = list_args(args);
    controller.set_search_input(search);
    let ticket = controller.search();
    let mut outcome = controller.run(ticket, &fetch).await;
    if page > 1 && outcome == ApplyOutcome::Applied {
        let ticket = controller.set_page(page);
        outcome = controller.run(ticket, &fetch).await;
    }

    if let ApplyOutcome::Failed(message) = outcome {
        eprintln!("{message}");
        return;
    }
    for item in controller.items() {
        println!("{}", line(item));
    }
    println!("{}", controller.summary());
    println!("{}", controller.controls());
}

fn with_page_size<T>(config: ListConfig<T>, items_per_page: usize) -> ListConfig<T> {
    ListConfig {
        items_per_page,
        ..config
    }
}

fn print_calendar(title: impl Display, cells: &[CalendarCell]) {
    println!("{title}");
    println!("{}", DAY_NAMES.join(" "));
    let mut row = String::new();
    for (index, cell) in cells.iter().enumerate() {
        match cell {
            CalendarCell::Blank => row.push_str("    "),
            CalendarCell::Day(day) if day.count > 0 => {
                row.push_str(&format!("{:>2}*{}", day.day, day.count.min(9)));
            }
            CalendarCell::Day(day) => row.push_str(&format!("{:>3} ", day.day)),
        }
        if index % 7 == 6 {
            println!("{}", row.trim_end());
            row.clear();
        }
    }
    if !row.is_empty() {
        println!("{}", row.trim_end());
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let dashboard_config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading dashboard config: {err}");
            std::process::exit(1);
        }
    };

    let store = Arc::new(LocalStore::open(dashboard_config.storage_path.clone()));
    let session = Session::new(store.clone());
    let api = match ApiClient::new(
        &dashboard_config.api_base_url,
        dashboard_config.request_timeout(),
        Arc::new(session.clone()),
    ) {
        Ok(api) => api,
        Err(err) => {
            log::error!("Failed to build API client: {err}");
            std::process::exit(1);
        }
    };
    let repo = RestRepository::new(api);
    let page_size = dashboard_config.page_size();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };
    let rest = &args[1..];

    if let Some(name) = session.display_name() {
        log::info!("Signed in as {name}");
    }

    match command.as_str() {
        "patients" => {
            let controller =
                ListController::new(with_page_size(patients::list_config(), page_size));
            show_list(
                controller,
                rest,
                |params| {
                    let repo = &repo;
                    async move { patients::list_patients(repo, &params).await }
                },
                |patient| {
                    format!(
                        "{:>5}  {:<30} {}",
                        patient.id.to_string(),
                        patient.name,
                        format_phone(&patient.phone)
                    )
                },
            )
            .await;
        }
        "dentists" => {
            let controller =
                ListController::new(with_page_size(dentists::list_config(), page_size));
            show_list(
                controller,
                rest,
                |params| {
                    let repo = &repo;
                    async move { dentists::list_dentists(repo, &params).await }
                },
                |dentist| {
                    format!(
                        "{:>5}  {:<30} CRO {}",
                        dentist.id.to_string(),
                        dentist.name,
                        dentist.cro
                    )
                },
            )
            .await;
        }
        "appointments" => {
            let names = match appointments::load_name_directory(&repo).await {
                Ok(names) => names,
                Err(err) => {
                    eprintln!("{}", err.user_message("Erro ao carregar pacientes e dentistas"));
                    std::process::exit(1);
                }
            };
            let controller =
                ListController::new(with_page_size(appointments::list_config(), page_size));
            show_list(
                controller,
                rest,
                |params| {
                    let repo = &repo;
                    async move { appointments::list_appointments(repo, &params).await }
                },
                |appointment| {
                    let row = AppointmentRow::new(appointment, &names);
                    format!(
                        "{} {}  {:<25} {:<25} {}",
                        row.date, row.time, row.patient_name, row.dentist_name, row.status
                    )
                },
            )
            .await;
        }
        "stats" => match dashboard::load_dashboard(&repo).await {
            Ok(page) => {
                let stats = page.stats;
                println!("Pacientes: {}", stats.total_patients);
                println!("Dentistas: {}", stats.total_dentists);
                println!("Consultas hoje: {}", stats.appointments_today);
                println!("Consultas na semana: {}", stats.appointments_this_week);
                println!("Consultas no mês: {}", stats.appointments_this_month);
                for recent in page.recent_appointments {
                    println!(
                        "{}  {} com {} ({})",
                        recent.appointment_date,
                        recent.patient_name,
                        recent.dentist_name,
                        recent.status.label()
                    );
                }
            }
            Err(err) => {
                eprintln!("{}", err.user_message("Erro ao carregar estatísticas"));
                std::process::exit(1);
            }
        },
        "calendar" => {
            let today = Local::now().date_naive();
            let view = match (rest.first(), rest.get(1)) {
                (Some(year), Some(month)) => {
                    let parsed = year
                        .parse()
                        .ok()
                        .zip(month.parse().ok())
                        .and_then(|(year, month)| MonthView::new(year, month));
                    match parsed {
                        Some(view) => view,
                        None => {
                            eprintln!("{USAGE}");
                            std::process::exit(2);
                        }
                    }
                }
                _ => MonthView::containing(today),
            };
            match dashboard::load_month_counts(&repo, view).await {
                Ok(counts) => {
                    print_calendar(view, &view.cells(&counts, today));
                    println!("Total no mês: {}", counts.total());
                }
                Err(err) => {
                    eprintln!("{}", err.user_message("Erro ao carregar calendário"));
                    std::process::exit(1);
                }
            }
        }
        "plans" => {
            for plan in settings::load_plans(&store) {
                println!("{plan}");
            }
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }
}
