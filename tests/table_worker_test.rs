use table_actors::framework::{EntityRequest, EntityWorker};
use table_actors::model::{OrderItem, TableId};
use table_actors::table_actor::{Table, TableCommand, TableError, TableReply};
use tokio::sync::oneshot;

async fn send(
    handle: &table_actors::framework::WorkerHandle<Table>,
    entity_id: TableId,
    command: TableCommand,
) -> TableReply {
    let (respond_to, response) = oneshot::channel();
    handle
        .forward(EntityRequest {
            entity_id,
            command,
            respond_to,
        })
        .unwrap();
    response.await.unwrap()
}

fn seeded_worker() -> (
    EntityWorker<Table>,
    table_actors::framework::WorkerHandle<Table>,
) {
    EntityWorker::with_state(Table::with_items(
        TableId(1),
        [OrderItem::new("1", "Pizza", 1), OrderItem::new("2", "Pasta", 1)],
    ))
}

#[tokio::test]
async fn test_worker_rejects_other_table() {
    let (worker, handle) = seeded_worker();
    let task = tokio::spawn(worker.run());

    let reply = send(&handle, TableId(2), TableCommand::ClearTable).await;
    assert_eq!(reply, TableReply::Rejected(TableError::WrongTable));

    // The misrouted clear did not touch the items.
    let TableReply::Items(items) = send(&handle, TableId(1), TableCommand::GetAllItems).await else {
        panic!("expected items");
    };
    assert_eq!(items.len(), 2);

    drop(handle);
    task.await.unwrap();
}

#[tokio::test]
async fn test_worker_survives_abandoned_callers() {
    let (worker, handle) = seeded_worker();
    tokio::spawn(worker.run());

    let (respond_to, response) = oneshot::channel();
    drop(response);
    handle
        .forward(EntityRequest {
            entity_id: TableId(1),
            command: TableCommand::DeleteItem("1".into()),
            respond_to,
        })
        .unwrap();

    // The delete still ran.
    let reply = send(&handle, TableId(1), TableCommand::GetItem("1".into())).await;
    assert_eq!(
        reply,
        TableReply::Rejected(TableError::ItemNotFound("1".into()))
    );
}
