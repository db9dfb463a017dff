//! Shared helpers for the integration tests: scripted gateway doubles and
//! raw-document fixtures shaped like real inference replies.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use fake::Fake;
use fake::faker::name::en::Name;
use serde_json::{Value, json};

use iperform_gateway::{GatewayError, SeedRequest, StateSynthesizer, fallback_state};
use iperform_models::SchoolState;

/// A gateway double driven by queued results. An empty queue answers the
/// way the HTTP gateway would on a healthy day: materialize yields the
/// fallback dataset, mutate echoes the current state back.
#[allow(dead_code)]
pub struct ScriptedGateway {
    materialize_queue: Mutex<VecDeque<Result<SchoolState, GatewayError>>>,
    mutate_queue: Mutex<VecDeque<Result<SchoolState, GatewayError>>>,
    pub mutate_calls: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedGateway {
    pub fn new() -> Self {
        Self {
            materialize_queue: Mutex::new(VecDeque::new()),
            mutate_queue: Mutex::new(VecDeque::new()),
            mutate_calls: AtomicUsize::new(0),
        }
    }

    pub fn push_materialize(&self, result: Result<SchoolState, GatewayError>) {
        self.materialize_queue.lock().unwrap().push_back(result);
    }

    pub fn push_mutate(&self, result: Result<SchoolState, GatewayError>) {
        self.mutate_queue.lock().unwrap().push_back(result);
    }

    pub fn mutate_call_count(&self) -> usize {
        self.mutate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StateSynthesizer for ScriptedGateway {
    async fn materialize(
        &self,
        seed: Option<&SeedRequest>,
    ) -> Result<SchoolState, GatewayError> {
        self.materialize_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(fallback_state(seed)))
    }

    async fn mutate(
        &self,
        current: &SchoolState,
        _action: &str,
    ) -> Result<SchoolState, GatewayError> {
        self.mutate_calls.fetch_add(1, Ordering::SeqCst);
        self.mutate_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(current.clone()))
    }
}

/// A gateway whose mutate call parks until released, for exercising the
/// in-flight guard.
#[allow(dead_code)]
pub struct BlockingGateway {
    pub release: tokio::sync::Notify,
}

#[allow(dead_code)]
impl BlockingGateway {
    pub fn new() -> Self {
        Self {
            release: tokio::sync::Notify::new(),
        }
    }
}

#[async_trait]
impl StateSynthesizer for BlockingGateway {
    async fn materialize(
        &self,
        seed: Option<&SeedRequest>,
    ) -> Result<SchoolState, GatewayError> {
        Ok(fallback_state(seed))
    }

    async fn mutate(
        &self,
        current: &SchoolState,
        _action: &str,
    ) -> Result<SchoolState, GatewayError> {
        self.release.notified().await;
        Ok(current.clone())
    }
}

/// A raw reply document with the kind of noise the service actually
/// produces: verbose role labels, stringly numbers, null and primitive
/// array entries, unknown fields.
#[allow(dead_code)]
pub fn raw_demo_document() -> Value {
    let student_name: String = Name().fake();
    let staff_name: String = Name().fake();
    json!({
        "schoolProfile": {
            "name": "Fixture Academy",
            "code": "FIX",
            "address": "1 Test Way",
            "motto": "Probatur",
            "founded": 1987
        },
        "users": [
            {
                "username": "principal",
                "password": "prin123",
                "role": "Principal",
                "name": staff_name,
                "mustChangePassword": false
            },
            {
                "username": "newstaff",
                "password": "temp1234",
                "role": "Director Of Studies",
                "name": "New Staff",
                "mustChangePassword": "true"
            },
            {
                "username": "student1",
                "password": "123",
                "role": "student",
                "name": student_name,
                "studentId": "S001",
                "class": "S4",
                "parentId": "parent1"
            },
            null,
            "garbage"
        ],
        "students": [
            null,
            {
                "id": "1",
                "username": "student1",
                "name": student_name,
                "studentId": "S001",
                "class": "S4",
                "gender": "Male",
                "parentId": "parent1"
            },
            42
        ],
        "marks": [
            {"id": 1, "studentId": "S001", "subject": "Math", "mark": "77"}
        ],
        "classes": "not-an-array",
        "attendances": null,
        "books": [],
        "note": "the service sometimes adds commentary fields like this one"
    })
}
