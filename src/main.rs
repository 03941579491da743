use anyhow::Result;
use community_pulse::agent::HttpAgentClient;
use community_pulse::chat::default_participants;
use community_pulse::config::{AgentConfig, EngineConfig};
use community_pulse::engine::Engine;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Community Pulse v{}", community_pulse::version());
    println!("=====================================");
    println!();

    let mut agent_config = AgentConfig::default();
    if let Ok(base_url) = std::env::var("PULSE_AGENT_URL") {
        agent_config.base_url = base_url;
    }
    let client = HttpAgentClient::new(agent_config)?;
    if client.health_check().await {
        println!("✓ Agent endpoint reachable");
    } else {
        println!("✗ Agent endpoint unreachable, replies degrade to the local responder");
    }

    let handle = Engine::spawn(EngineConfig::default(), Arc::new(client));
    let roster = default_participants();

    let script = [
        (0, "Hey team, how is the Optimization looking for the new model?"),
        (1, "We need to keep the Budget under control this quarter."),
        (2, "The GPU dataset pipeline hit a latency blocker again."),
        (0, "I will profile the API tonight. @Omni anything on your radar?"),
    ];

    for (who, text) in script {
        let sender = roster[who].clone();
        println!("{}: {}", sender.name, text);
        handle.send_message(sender, text).await?;
        // Let the graph animate and the agent branches land between sends.
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    let snapshot = handle.snapshot();
    println!();
    println!("Transcript: {} messages", snapshot.messages.len());
    println!("Graph: {} topics, {} links", snapshot.nodes.len(), snapshot.links.len());
    for node in &snapshot.nodes {
        println!("  {:<14} size {:>5.1} at ({:>6.1}, {:>6.1})", node.id, node.size, node.x, node.y);
    }
    println!("Tasks:");
    for task in &snapshot.tasks {
        let mark = if task.completed { "x" } else { " " };
        println!("  [{mark}] {} ({})", task.text, task.assigned_to);
    }

    handle.shutdown().await;
    Ok(())
}
