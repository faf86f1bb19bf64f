//! Builds the deployment-review deck for the cloud game-playing VM.
//!
//! Run with `cargo run --example game_player_deck [OUTPUT]`; the output
//! defaults to `claude-game-player.pptx` in the working directory.

use longan::deck::Assembler;
use longan::serializer::PptxSerializer;
use longan::slides::{
    ClosingContent, ComparisonContent, Component, DiagramContent, IssueListContent, IssueRow,
    Panel, SlideContent, StatusBoardContent, StatusRow, TableContent, TableRow, TitleContent,
    WorkflowContent, WorkflowStep, compose_deck,
};
use longan::{DeckMetadata, Theme};
use std::path::PathBuf;

fn contents() -> Vec<SlideContent> {
    vec![
        SlideContent::Title(TitleContent {
            title: "Claude Game Player".into(),
            subtitle: "Autonomous Game Playing on a Cloud VM".into(),
            tagline: "Claude Code + Playwright MCP + DigitalOcean + ffmpeg Recording".into(),
            date_line: "February 2026".into(),
        }),
        SlideContent::Comparison(ComparisonContent {
            heading: "Why a Cloud VM?".into(),
            panels: vec![
                Panel {
                    header: "The Problem".into(),
                    accent: "coral".into(),
                    bullets: vec![
                        "claude --remote has no display".into(),
                        "Can't run headed browsers".into(),
                        "No screen recording capability".into(),
                        "Ties up your local machine".into(),
                    ],
                },
                Panel {
                    header: "The Solution".into(),
                    accent: "mint".into(),
                    bullets: vec![
                        "Disposable $24/mo DigitalOcean VM".into(),
                        "Virtual display (Xvfb) + headed browser".into(),
                        "ffmpeg records everything".into(),
                        "VNC for live spectating".into(),
                    ],
                },
            ],
        }),
        SlideContent::Diagram(DiagramContent {
            heading: "Architecture".into(),
            container_label: "DigitalOcean Droplet (Ubuntu 24.04, s-2vcpu-4gb)".into(),
            components: vec![
                Component {
                    name: "Xvfb".into(),
                    desc: "Virtual Display :99".into(),
                    accent: "deep_blue".into(),
                },
                Component {
                    name: "x11vnc".into(),
                    desc: "VNC Server".into(),
                    accent: "teal".into(),
                },
                Component {
                    name: "Chromium".into(),
                    desc: "Headed Browser".into(),
                    accent: "mint".into(),
                },
                Component {
                    name: "ffmpeg".into(),
                    desc: "Screen Recorder".into(),
                    accent: "gold".into(),
                },
                Component {
                    name: "Claude CLI".into(),
                    desc: "AI Agent".into(),
                    accent: "coral".into(),
                },
            ],
            flow_note: "Playwright MCP controls Chromium on display :99  |  ffmpeg captures display :99  |  x11vnc shares display :99".into(),
            callouts: vec![
                "Your Laptop: SSH tunnel + VNC + tmux attach".into(),
                "tmux: Persistent sessions survive SSH disconnect".into(),
            ],
        }),
        SlideContent::Table(TableContent {
            heading: "Deployment Scripts".into(),
            rows: vec![
                TableRow {
                    name: "setup.sh".into(),
                    desc: "One-time VM provisioning (Node, Chromium, systemd, swap, firewall)".into(),
                },
                TableRow {
                    name: "start-session.sh".into(),
                    desc: "Starts Xvfb + VNC, creates tmux session with DISPLAY=:99".into(),
                },
                TableRow {
                    name: "record.sh".into(),
                    desc: "ffmpeg controller: start / stop (SIGINT) / status with PID tracking".into(),
                },
                TableRow {
                    name: "play.sh".into(),
                    desc: "Launches Claude in tmux, auto-starts/stops recording per session".into(),
                },
                TableRow {
                    name: "cleanup.sh".into(),
                    desc: "Deletes recordings older than N days (default 7)".into(),
                },
            ],
        }),
        SlideContent::Workflow(WorkflowContent {
            heading: "Deployment Workflow".into(),
            steps: vec![
                WorkflowStep {
                    title: "Create Droplet".into(),
                    desc: "doctl + Ubuntu 24.04 + SSH key".into(),
                },
                WorkflowStep {
                    title: "Upload & Setup".into(),
                    desc: "scp files, run setup.sh (~5 min)".into(),
                },
                WorkflowStep {
                    title: "Configure".into(),
                    desc: "API key + MCP config + VNC login".into(),
                },
                WorkflowStep {
                    title: "Play!".into(),
                    desc: "play.sh launches Claude + recording".into(),
                },
            ],
            command: Some(r#"$ play.sh "Go to brilliant.org and play the logic course""#.into()),
        }),
        SlideContent::Issues(IssueListContent {
            heading: "Issues & Solutions".into(),
            rows: vec![
                IssueRow {
                    issue: "Root + skip-permissions blocked".into(),
                    solution: "Created non-root 'claude' user with limited sudoers".into(),
                    accent: "coral".into(),
                },
                IssueRow {
                    issue: "Cookies encrypted by system keyring".into(),
                    solution: "Use Playwright's own persistent profile (--user-data-dir)".into(),
                    accent: "gold".into(),
                },
                IssueRow {
                    issue: "Google blocks OAuth on VM browser".into(),
                    solution: "Set email/password on Brilliant account settings".into(),
                    accent: "deep_blue".into(),
                },
            ],
        }),
        SlideContent::StatusBoard(StatusBoardContent {
            heading: "Current Status".into(),
            rows: vec![
                StatusRow {
                    label: "VM Provisioned".into(),
                    status: "DONE".into(),
                    accent: "mint".into(),
                },
                StatusRow {
                    label: "Xvfb + x11vnc".into(),
                    status: "RUNNING".into(),
                    accent: "mint".into(),
                },
                StatusRow {
                    label: "ffmpeg Recording".into(),
                    status: "WORKING".into(),
                    accent: "mint".into(),
                },
                StatusRow {
                    label: "Claude Plays Games".into(),
                    status: "WORKING".into(),
                    accent: "mint".into(),
                },
                StatusRow {
                    label: "Brilliant Login".into(),
                    status: "IN PROGRESS".into(),
                    accent: "gold".into(),
                },
            ],
            next_heading: "Next Steps".into(),
            next_steps: vec![
                "Set password on Brilliant account".into(),
                "Login via Playwright's browser on VNC".into(),
                "Run play.sh for full autonomous session".into(),
                "Download and review recordings".into(),
            ],
        }),
        SlideContent::Closing(ClosingContent {
            heading: "Ready to Play".into(),
            address: "198.199.88.205".into(),
            lines: vec![
                "SSH:  ssh -i ~/.ssh/id_ed25519 claude@198.199.88.205".into(),
                "VNC:  localhost:6080 via SSH tunnel".into(),
                r#"Play: bash play.sh "Go play logic puzzles""#.into(),
            ],
        }),
    ]
}

#[tokio::main]
async fn main() -> longan::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let dest = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("claude-game-player.pptx"));

    let metadata = DeckMetadata::new(
        "Claude Game Player — Cloud VM Architecture",
        "Vivek Karmarkar",
    );
    let deck = compose_deck(metadata, &contents(), &Theme::ocean())?;

    let serializer = PptxSerializer::new(deck.metadata.clone());
    let handle = Assembler::new(serializer).build(&deck, &dest).await?;
    println!(
        "wrote {} slides to {}",
        handle.slide_count(),
        handle.path().display()
    );
    Ok(())
}
