#![allow(dead_code)]
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Mock WHOIS server for tests
///
/// Answers each query line with its canned responses in order, repeating
/// the last one, or with an empty body when the query is unknown.
/// `start_silent` accepts connections without ever replying.
pub struct MockWhoisServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockWhoisServer {
    pub async fn start(routes: Vec<(&str, Vec<&str>)>) -> Result<Self, std::io::Error> {
        let responses: HashMap<String, VecDeque<String>> = routes
            .into_iter()
            .map(|(query, bodies)| {
                (
                    query.to_string(),
                    bodies.into_iter().map(str::to_string).collect(),
                )
            })
            .collect();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let responses = Arc::new(Mutex::new(responses));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let counter = Arc::clone(&queries);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { continue };
                        let responses = Arc::clone(&responses);
                        let counter = Arc::clone(&counter);
                        tokio::spawn(async move {
                            let (read_half, mut write_half) = stream.into_split();
                            let mut line = String::new();
                            if BufReader::new(read_half).read_line(&mut line).await.is_err() {
                                return;
                            }
                            counter.fetch_add(1, Ordering::SeqCst);
                            let body = next_response(&responses, line.trim());
                            let _ = write_half.write_all(body.as_bytes()).await;
                            let _ = write_half.shutdown().await;
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Accepts connections and never answers, to drive client timeouts.
    pub async fn start_silent() -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let counter = Arc::clone(&queries);

        tokio::spawn(async move {
            let mut held = Vec::new();
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { continue };
                        counter.fetch_add(1, Ordering::SeqCst);
                        held.push(stream);
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Drop for MockWhoisServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn next_response(responses: &Mutex<HashMap<String, VecDeque<String>>>, query: &str) -> String {
    let Ok(mut responses) = responses.lock() else {
        return String::new();
    };
    match responses.get_mut(query) {
        Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_default(),
        Some(queue) => queue.front().cloned().unwrap_or_default(),
        None => String::new(),
    }
}
