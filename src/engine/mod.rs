//! The engine: orchestrator and simulation loop.
//!
//! All mutable state (topic graph, transcript, task board) lives inside one
//! spawned actor task. Four event sources feed it (message sends, agent
//! round-trip completions, the 20 Hz physics tick, and the slow enrichment
//! tick) and every update is applied against the latest committed state,
//! never a stale one. Readers observe the engine only through cloned
//! [`Snapshot`]s published over a `watch` channel, so a render pass can never
//! see a torn update.
//!
//! The agent round trip and task extraction run as detached tasks posting
//! completion commands back; a completion that arrives after shutdown is
//! dropped on the closed channel. Neither branch can stall the tick.

use crate::agent::{responder, AgentRequest, AgentService};
use crate::chat::{agent_identity, Message, Participant};
use crate::config::EngineConfig;
use crate::graph::{TopicGraph, TopicLink, TopicNode};
use crate::keywords::extract_keywords;
use crate::physics;
use crate::synth;
use crate::tasks::{detect_action_item, Task, TaskBoard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("engine is shut down")]
    Closed,
}

pub type EngineResult<T> = Result<T, EngineError>;

/// A consistent view of the full engine state at one commit point.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot {
    pub nodes: Vec<TopicNode>,
    pub links: Vec<TopicLink>,
    pub messages: Vec<Message>,
    pub tasks: Vec<Task>,
    pub insight: Option<String>,
}

enum Command {
    SendMessage {
        sender: Participant,
        text: String,
        ack: oneshot::Sender<()>,
    },
    ToggleTask(u64),
    DeleteTask(u64),
    ClearTasks,
    RequestInsight,
    // Completions posted back by detached tasks.
    AgentReplyReady {
        text: String,
        keywords: Vec<String>,
    },
    TasksReady {
        assigned_to: String,
        tasks: Vec<String>,
    },
    InsightReady(String),
    Shutdown,
}

/// Cheap, clonable front door to a running engine.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<Command>,
    snapshot_rx: watch::Receiver<Snapshot>,
}

impl EngineHandle {
    /// Send a message into the discussion.
    ///
    /// Resolves once the synchronous part (transcript append, keyword
    /// growth, co-mention links) has committed. The agent round trip and
    /// task extraction continue in the background. Blank input is ignored.
    pub async fn send_message(
        &self,
        sender: Participant,
        text: impl Into<String>,
    ) -> EngineResult<()> {
        let text = text.into();
        if text.trim().is_empty() {
            return Ok(());
        }
        let (ack, acked) = oneshot::channel();
        self.cmd_tx
            .send(Command::SendMessage { sender, text, ack })
            .await
            .map_err(|_| EngineError::Closed)?;
        acked.await.map_err(|_| EngineError::Closed)
    }

    pub async fn toggle_task(&self, id: u64) -> EngineResult<()> {
        self.send(Command::ToggleTask(id)).await
    }

    pub async fn delete_task(&self, id: u64) -> EngineResult<()> {
        self.send(Command::DeleteTask(id)).await
    }

    pub async fn clear_tasks(&self) -> EngineResult<()> {
        self.send(Command::ClearTasks).await
    }

    /// Ask the agent for a fresh summary of the topic graph. The result
    /// lands in a later snapshot's `insight` field.
    pub async fn request_insight(&self) -> EngineResult<()> {
        self.send(Command::RequestInsight).await
    }

    /// Stop the engine. Timers are released with the actor task; no mutation
    /// happens after this resolves and in-flight agent replies are dropped.
    pub async fn shutdown(&self) {
        let _ = self.cmd_tx.send(Command::Shutdown).await;
    }

    /// The latest committed snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Subscribe to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_rx.clone()
    }

    async fn send(&self, command: Command) -> EngineResult<()> {
        self.cmd_tx
            .send(command)
            .await
            .map_err(|_| EngineError::Closed)
    }
}

/// The actor owning all mutable state.
pub struct Engine {
    config: EngineConfig,
    service: Arc<dyn AgentService>,
    graph: TopicGraph,
    messages: Vec<Message>,
    board: TaskBoard,
    insight: Option<String>,
    next_message_id: u64,
    rng: StdRng,
    snapshot_tx: watch::Sender<Snapshot>,
    cmd_tx: mpsc::Sender<Command>,
}

impl Engine {
    /// Spawn the engine task and return its handle.
    pub fn spawn(config: EngineConfig, service: Arc<dyn AgentService>) -> EngineHandle {
        let graph = TopicGraph::with_seed(&config.seed_topic, config.seed_size);
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let (cmd_tx, cmd_rx) = mpsc::channel(64);
        let (snapshot_tx, snapshot_rx) = watch::channel(Snapshot::default());

        let engine = Engine {
            config,
            service,
            graph,
            messages: Vec::new(),
            board: TaskBoard::new(),
            insight: None,
            next_message_id: 1,
            rng,
            snapshot_tx,
            cmd_tx: cmd_tx.clone(),
        };

        info!(seed_topic = %engine.config.seed_topic, "engine starting");
        engine.publish();
        tokio::spawn(engine.run(cmd_rx));

        EngineHandle {
            cmd_tx,
            snapshot_rx,
        }
    }

    async fn run(mut self, mut cmd_rx: mpsc::Receiver<Command>) {
        let mut physics_tick = tokio::time::interval(self.config.physics_tick);
        let mut enrichment_tick = tokio::time::interval(self.config.enrichment_tick);
        physics_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        enrichment_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // Intervals fire immediately once; swallow that so the seed layout is
        // visible unmoved and enrichment waits a full period.
        physics_tick.tick().await;
        enrichment_tick.tick().await;

        loop {
            tokio::select! {
                command = cmd_rx.recv() => match command {
                    None | Some(Command::Shutdown) => break,
                    Some(command) => self.apply(command),
                },
                _ = physics_tick.tick() => self.tick_physics(),
                _ = enrichment_tick.tick() => self.tick_enrichment(),
            }
        }
        info!("engine stopped");
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::SendMessage { sender, text, ack } => {
                self.handle_send(sender, text);
                let _ = ack.send(());
            }
            Command::AgentReplyReady { text, keywords } => self.handle_agent_reply(text, keywords),
            Command::TasksReady { assigned_to, tasks } => {
                for task in tasks {
                    self.board.add(task, &assigned_to);
                }
                self.publish();
            }
            Command::InsightReady(insight) => {
                self.insight = Some(insight);
                self.publish();
            }
            Command::ToggleTask(id) => {
                self.board.toggle(id);
                self.publish();
            }
            Command::DeleteTask(id) => {
                self.board.delete(id);
                self.publish();
            }
            Command::ClearTasks => {
                self.board.clear();
                self.publish();
            }
            Command::RequestInsight => self.spawn_insight(),
            // The run loop breaks on Shutdown before dispatching here; if one
            // ever slips through, stopping without mutation is still correct.
            Command::Shutdown => {}
        }
    }

    /// Synchronous part of a message send: transcript, node growth,
    /// co-mention links. Then the two asynchronous branches are fired.
    fn handle_send(&mut self, sender: Participant, text: String) {
        let message = Message::new(self.alloc_message_id(), sender.clone(), text.clone());
        self.messages.push(message);

        let found = extract_keywords(&text);
        if !found.is_empty() {
            debug!(keywords = ?found, "keywords matched");
            for keyword in &found {
                self.graph.grow_or_create(keyword, &mut self.rng);
            }
            for (a, b) in synth::co_mention_pairs(&found) {
                self.graph.link_if_absent(&a, &b);
            }
        }
        self.publish();

        self.spawn_agent_round_trip(text.clone(), sender.name.clone());
        self.spawn_task_extraction(text, sender.name);
    }

    /// Agent reply arrival: append to the transcript, then merge any
    /// suggested keywords into the graph with synthesized links.
    fn handle_agent_reply(&mut self, text: String, keywords: Vec<String>) {
        let message = Message::new(self.alloc_message_id(), agent_identity(), text)
            .with_keywords(keywords.clone());
        self.messages.push(message);

        for keyword in keywords {
            if let Some(outcome) = self.graph.grow_or_create(&keyword, &mut self.rng) {
                debug!(keyword = outcome.id(), created = outcome.is_created(), "agent keyword merged");
                let canonical = outcome.id().to_string();
                let nodes = self.graph.node_snapshot();
                for (a, b) in synth::keyword_pairs(&canonical, &nodes, &mut self.rng) {
                    self.graph.link_if_absent(&a, &b);
                }
            }
        }
        self.publish();
    }

    fn spawn_agent_round_trip(&mut self, text: String, sender: String) {
        let context_start = self
            .messages
            .len()
            .saturating_sub(self.config.context_window);
        let request = AgentRequest {
            context: self.messages[context_start..].to_vec(),
            text: text.clone(),
            sender: sender.clone(),
        };
        let service = Arc::clone(&self.service);
        let cmd_tx = self.cmd_tx.clone();
        let typing_delay = self.config.typing_delay;
        let fallback_seed: u64 = self.rng.gen();

        tokio::spawn(async move {
            let reply = match service.respond(request).await {
                Ok(reply) => Some((reply.text, reply.keywords)),
                Err(err) => {
                    warn!(error = %err, "agent round trip failed, degrading to local responder");
                    let mut rng = StdRng::seed_from_u64(fallback_seed);
                    responder::fallback_reply(&text, &sender, &mut rng)
                        .map(|text| (text, Vec::new()))
                }
            };
            if let Some((text, keywords)) = reply {
                tokio::time::sleep(typing_delay).await;
                // A send after shutdown fails; the late reply is ignored.
                let _ = cmd_tx
                    .send(Command::AgentReplyReady { text, keywords })
                    .await;
            }
        });
    }

    fn spawn_task_extraction(&self, text: String, sender: String) {
        let service = Arc::clone(&self.service);
        let cmd_tx = self.cmd_tx.clone();

        tokio::spawn(async move {
            let extracted = match service.extract_tasks(&text, &sender).await {
                Ok(tasks) if !tasks.is_empty() => tasks,
                Ok(_) => detect_action_item(&text).into_iter().collect(),
                Err(err) => {
                    warn!(error = %err, "task extraction failed, using pattern fallback");
                    detect_action_item(&text).into_iter().collect()
                }
            };
            if !extracted.is_empty() {
                let _ = cmd_tx
                    .send(Command::TasksReady {
                        assigned_to: sender,
                        tasks: extracted,
                    })
                    .await;
            }
        });
    }

    fn spawn_insight(&self) {
        let nodes = self.graph.node_snapshot();
        let service = Arc::clone(&self.service);
        let cmd_tx = self.cmd_tx.clone();

        tokio::spawn(async move {
            match service.analyze_graph(&nodes).await {
                Ok(insight) => {
                    let _ = cmd_tx.send(Command::InsightReady(insight)).await;
                }
                // The previous insight stays in place on failure.
                Err(err) => warn!(error = %err, "graph analysis failed"),
            }
        });
    }

    /// One simulation tick: move every node against the previous snapshot,
    /// then commit the whole set.
    fn tick_physics(&mut self) {
        if self.graph.node_count() == 0 {
            return;
        }
        let moved = physics::step_all(&self.graph.node_snapshot(), &mut self.rng);
        self.graph.replace_nodes(moved);
        self.publish();
    }

    fn tick_enrichment(&mut self) {
        let nodes = self.graph.node_snapshot();
        let pairs = synth::enrichment_pairs(&nodes, self.config.enrichment_density, &mut self.rng);
        let mut added = 0usize;
        for (a, b) in pairs {
            if self.graph.link_if_absent(&a, &b) {
                added += 1;
            }
        }
        if added > 0 {
            debug!(added, "enrichment links added");
            self.publish();
        }
    }

    fn alloc_message_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(Snapshot {
            nodes: self.graph.node_snapshot(),
            links: self.graph.links().to_vec(),
            messages: self.messages.clone(),
            tasks: self.board.tasks().to_vec(),
            insight: self.insight.clone(),
        });
    }
}
