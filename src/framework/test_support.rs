//! A tiny counter entity used by the framework's own tests.

use crate::framework::{ActorEntity, Envelope};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    id: u32,
    value: u64,
}

#[derive(Debug)]
pub enum CounterCommand {
    Increment,
    Get,
    Label,
    Stall(Duration),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CounterReply {
    Value(u64),
    Label(String),
    Misrouted(u32),
}

#[async_trait]
impl ActorEntity for Counter {
    type Id = u32;
    type Command = CounterCommand;
    type Reply = CounterReply;

    fn from_id(id: u32) -> Self {
        Self { id, value: 0 }
    }

    fn id(&self) -> &u32 {
        &self.id
    }

    async fn handle(&mut self, command: CounterCommand) -> CounterReply {
        match command {
            CounterCommand::Increment => {
                self.value += 1;
                CounterReply::Value(self.value)
            }
            CounterCommand::Get => CounterReply::Value(self.value),
            CounterCommand::Label => CounterReply::Label(format!("counter-{}", self.id)),
            CounterCommand::Stall(delay) => {
                tokio::time::sleep(delay).await;
                CounterReply::Value(self.value)
            }
        }
    }

    fn misrouted(&self, target: &u32) -> CounterReply {
        CounterReply::Misrouted(*target)
    }
}

impl TryFrom<CounterReply> for Envelope<u64> {
    type Error = CounterReply;

    fn try_from(reply: CounterReply) -> Result<Self, CounterReply> {
        match reply {
            CounterReply::Value(v) => Ok(Envelope::success(v)),
            CounterReply::Misrouted(_) => Ok(Envelope::error("wrong counter")),
            other => Err(other),
        }
    }
}

impl TryFrom<CounterReply> for Envelope<String> {
    type Error = CounterReply;

    fn try_from(reply: CounterReply) -> Result<Self, CounterReply> {
        match reply {
            CounterReply::Label(label) => Ok(Envelope::success(label)),
            CounterReply::Misrouted(_) => Ok(Envelope::error("wrong counter")),
            other => Err(other),
        }
    }
}
