//! Terminal dashboard client: renders the agent list, tool catalog and a chat
//! transcript against a running gateway.

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use agentdash::catalog::{AgentDescriptor, ToolDescriptor};
use agentdash::config::Config;
use agentdash::dashboard::cache::TtlCache;
use agentdash::dashboard::client::GatewayClient;
use agentdash::dashboard::session::{DashboardSession, TurnRole};

struct Dashboard {
    client: GatewayClient,
    session: DashboardSession,
    agents_cache: TtlCache<Vec<AgentDescriptor>>,
    tools_cache: TtlCache<Vec<ToolDescriptor>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agentdash=info".into()),
        )
        .init();

    let config = std::env::var("CONFIG_PATH")
        .ok()
        .and_then(|path| Config::load(&path).ok())
        .or_else(|| Config::load("conf.yaml").ok())
        .unwrap_or_default();

    let base_url = std::env::var("API_BASE_URL")
        .unwrap_or_else(|_| config.dashboard_config.api_base_url.clone());
    let ttl = Duration::from_secs(config.dashboard_config.catalog_ttl_secs);

    let mut dashboard = Dashboard {
        client: GatewayClient::new(base_url),
        session: DashboardSession::new(),
        agents_cache: TtlCache::new(ttl),
        tools_cache: TtlCache::new(ttl),
    };

    println!("=== Agent Dashboard ===");
    println!("Gateway: {}", dashboard.client.base_url());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    // The initial catalog fetch is blocking: without it there is nothing to
    // render, so keep retrying until it succeeds or the user gives up.
    while let Err(e) = dashboard.refresh_catalog().await {
        eprintln!(
            "Cannot connect to backend API at {}: {}. \
             Ensure the agentdash-server is running.",
            dashboard.client.base_url(),
            e
        );
        println!("Press Enter to retry, or type 'quit' to exit.");
        match lines.next_line().await? {
            Some(line) if line.trim() == "quit" => return Ok(()),
            Some(_) => continue,
            None => return Ok(()),
        }
    }

    // Default to the first agent, matching the original dropdown.
    if let Some(first_id) = dashboard.session.agents().first().map(|a| a.id.clone()) {
        if let Some(name) = dashboard.session.select_agent(&first_id) {
            println!("-- Switched to agent: {}", name);
        }
    }
    print_help();

    loop {
        print_prompt(&dashboard.session);
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            ":quit" | ":q" => break,
            ":help" => print_help(),
            ":agents" => dashboard.show_agents().await,
            ":tools" => dashboard.show_tools().await,
            _ if line.starts_with(":use ") => {
                let id = line.trim_start_matches(":use ").trim();
                match dashboard.session.select_agent(id) {
                    Some(name) => println!("-- Switched to agent: {}", name),
                    None => eprintln!("!! Unknown agent id: {}", id),
                }
            }
            _ if line.starts_with(':') => eprintln!("!! Unknown command: {}", line),
            prompt => dashboard.submit(prompt).await,
        }
    }

    Ok(())
}

impl Dashboard {
    /// Fetch both catalogs through the TTL cache and install them in the
    /// session. Cache hits skip the network entirely.
    async fn refresh_catalog(&mut self) -> Result<()> {
        let now = Instant::now();

        let agents = match self.agents_cache.get(now) {
            Some(agents) => agents.clone(),
            None => {
                debug!("agent catalog stale, refetching");
                let agents = self.client.fetch_agents().await?;
                self.agents_cache.put(agents.clone(), now);
                agents
            }
        };

        let tools = match self.tools_cache.get(now) {
            Some(tools) => tools.clone(),
            None => {
                let tools = self.client.fetch_tools().await?;
                self.tools_cache.put(tools.clone(), now);
                tools
            }
        };

        self.session.set_catalog(agents, tools);
        Ok(())
    }

    async fn show_agents(&mut self) {
        if let Err(e) = self.refresh_catalog().await {
            eprintln!("!! Error fetching agents: {}", e);
            return;
        }
        println!("Available agents:");
        for agent in self.session.agents() {
            let marker = if self.session.selected_agent_id() == Some(agent.id.as_str()) {
                "*"
            } else {
                " "
            };
            println!(
                " {} {}  [{}] {}",
                marker,
                agent.id,
                agent.agent_type.label(),
                agent.name
            );
            println!("     {}", agent.description);
        }
    }

    async fn show_tools(&mut self) {
        if let Err(e) = self.refresh_catalog().await {
            eprintln!("!! Could not load the list of pre-built tools: {}", e);
            return;
        }
        println!("Available pre-built tools:");
        for tool in self.session.tools() {
            println!("   {} ({}): {}", tool.name, tool.category, tool.description);
        }
    }

    /// Two-phase submission: pending placeholder first, then the network
    /// call, then id-keyed resolution.
    async fn submit(&mut self, prompt: &str) {
        let Some(agent_id) = self.session.selected_agent_id().map(String::from) else {
            eprintln!("!! No agent selected. Use :agents and :use <id> first.");
            return;
        };

        let placeholder = self.session.begin_exchange(prompt);
        render_transcript(&self.session);

        let history = self.session.history_payload();
        match self.client.chat(&agent_id, prompt, history).await {
            Ok(response) => {
                self.session.resolve_reply(placeholder, response);
            }
            Err(e) => {
                let message = format!("Backend Request Error: {}", e);
                self.session.resolve_error(placeholder, message.clone());
                eprintln!("!! {}", message);
            }
        }
        render_transcript(&self.session);
    }
}

fn render_transcript(session: &DashboardSession) {
    println!("----------------------------------------");
    for turn in session.transcript() {
        match turn.role {
            TurnRole::User => println!("you> {}", turn.content),
            TurnRole::Assistant => println!("  ai> {}", turn.content),
            TurnRole::Error => println!("  !! Connection Issue: {}", turn.content),
        }
    }
    println!("----------------------------------------");
}

fn print_prompt(session: &DashboardSession) {
    match session.selected_agent() {
        Some(agent) => println!("[chat with: {}] (:help for commands)", agent.name),
        None => println!("[no agent selected] (:help for commands)"),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  :agents      list available agents");
    println!("  :tools       list available pre-built tools");
    println!("  :use <id>    switch agent (clears the transcript)");
    println!("  :quit        exit");
    println!("Anything else is sent to the selected agent as a prompt.");
}
