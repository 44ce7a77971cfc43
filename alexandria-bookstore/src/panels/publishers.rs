use crate::queries::{
    create_publisher::{create_publisher, CreatePublisher},
    get_publishers::{get_publishers, GetPublishers},
    update_publisher::{update_publisher, UpdatePublisher}
};
use alexandria::{exchange::Exchange, ext, Client, QueryError, QueryOptions};
use alexandria_query_cache::{Dependencies, QueryCacheExtension, QueryStore};
use parking_lot::Mutex;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PublisherDraft {
    pub id: Option<String>,
    pub name: String
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PublishersPanelState {
    pub publisher_dialog: Option<PublisherDraft>
}

type Listener = Box<dyn Fn(&PublishersPanelState) + Send + Sync>;

pub struct PublishersPanel<M: Exchange> {
    client: Client<M>,
    state: Mutex<PublishersPanelState>,
    listeners: Mutex<Vec<Listener>>
}

impl<M: Exchange> PublishersPanel<M> {
    pub fn new(client: Client<M>) -> Self {
        PublishersPanel {
            client,
            state: Mutex::new(PublishersPanelState::default()),
            listeners: Mutex::new(Vec::new())
        }
    }

    pub fn state(&self) -> PublishersPanelState {
        self.state.lock().clone()
    }

    pub fn on_change<F: Fn(&PublishersPanelState) + Send + Sync + 'static>(&self, listener: F) {
        self.listeners.lock().push(Box::new(listener));
    }

    fn mutate<F: FnOnce(&mut PublishersPanelState)>(&self, mutation: F) {
        let snapshot = {
            let mut state = self.state.lock();
            mutation(&mut state);
            state.clone()
        };
        for listener in self.listeners.lock().iter() {
            listener(&snapshot);
        }
    }

    pub fn edit_new_publisher(&self) {
        self.mutate(|state| state.publisher_dialog = Some(PublisherDraft::default()));
    }

    pub fn edit_publisher(&self, publisher: &get_publishers::GetPublishersPublishers) {
        let draft = PublisherDraft {
            id: Some(publisher.id.clone()),
            name: publisher.name.clone()
        };
        self.mutate(|state| state.publisher_dialog = Some(draft));
    }

    pub fn close_publisher_dialog(&self) {
        self.mutate(|state| state.publisher_dialog = None);
    }

    pub async fn publishers(
        &self
    ) -> Result<Vec<get_publishers::GetPublishersPublishers>, QueryError> {
        let response = self
            .client
            .query(GetPublishers, get_publishers::Variables)
            .await?;
        Ok(response.data.map(|data| data.publishers).unwrap_or_default())
    }

    pub async fn save_publisher(&self, draft: PublisherDraft) -> Result<(), QueryError> {
        match draft.id {
            None => {
                let variables = create_publisher::Variables {
                    publisher: create_publisher::PublisherInput { name: draft.name }
                };
                let options = QueryOptions {
                    extensions: Some(ext![QueryCacheExtension::new()
                        .update::<CreatePublisher, _>(merge_created_publisher)]),
                    ..QueryOptions::default()
                };
                self.client
                    .query_with_options(CreatePublisher, variables, options)
                    .await?;
            }
            Some(publisher_id) => {
                let variables = update_publisher::Variables {
                    publisher_id,
                    publisher: update_publisher::PublisherInput { name: draft.name }
                };
                self.client.query(UpdatePublisher, variables).await?;
            }
        }
        self.close_publisher_dialog();
        Ok(())
    }
}

/// Patch the cached publishers list with a just-created publisher. Same
/// contract as [merge_created_book](./fn.merge_created_book.html).
pub fn merge_created_publisher(
    data: &Option<create_publisher::ResponseData>,
    store: QueryStore,
    dependencies: &mut Dependencies
) {
    let created = match data {
        Some(data) => data.create_publisher.clone(),
        None => return
    };
    store.update_query(
        GetPublishers,
        get_publishers::Variables,
        move |current| {
            let mut current = current?;
            if current
                .publishers
                .iter()
                .any(|publisher| publisher.id == created.id)
            {
                return None;
            }
            current.publishers.push(get_publishers::GetPublishersPublishers {
                id: created.id,
                name: created.name
            });
            Some(current)
        },
        dependencies
    );
}
