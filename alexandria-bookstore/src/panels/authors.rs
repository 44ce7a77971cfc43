use crate::queries::{
    create_author::{create_author, CreateAuthor},
    get_authors::{get_authors, GetAuthors},
    update_author::{update_author, UpdateAuthor}
};
use alexandria::{exchange::Exchange, ext, Client, QueryError, QueryOptions};
use alexandria_query_cache::{Dependencies, QueryCacheExtension, QueryStore};
use parking_lot::Mutex;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthorDraft {
    pub id: Option<String>,
    pub name: String
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthorsPanelState {
    pub author_dialog: Option<AuthorDraft>
}

type Listener = Box<dyn Fn(&AuthorsPanelState) + Send + Sync>;

pub struct AuthorsPanel<M: Exchange> {
    client: Client<M>,
    state: Mutex<AuthorsPanelState>,
    listeners: Mutex<Vec<Listener>>
}

impl<M: Exchange> AuthorsPanel<M> {
    pub fn new(client: Client<M>) -> Self {
        AuthorsPanel {
            client,
            state: Mutex::new(AuthorsPanelState::default()),
            listeners: Mutex::new(Vec::new())
        }
    }

    pub fn state(&self) -> AuthorsPanelState {
        self.state.lock().clone()
    }

    pub fn on_change<F: Fn(&AuthorsPanelState) + Send + Sync + 'static>(&self, listener: F) {
        self.listeners.lock().push(Box::new(listener));
    }

    fn mutate<F: FnOnce(&mut AuthorsPanelState)>(&self, mutation: F) {
        let snapshot = {
            let mut state = self.state.lock();
            mutation(&mut state);
            state.clone()
        };
        for listener in self.listeners.lock().iter() {
            listener(&snapshot);
        }
    }

    pub fn edit_new_author(&self) {
        self.mutate(|state| state.author_dialog = Some(AuthorDraft::default()));
    }

    pub fn edit_author(&self, author: &get_authors::GetAuthorsAuthors) {
        let draft = AuthorDraft {
            id: Some(author.id.clone()),
            name: author.name.clone()
        };
        self.mutate(|state| state.author_dialog = Some(draft));
    }

    pub fn close_author_dialog(&self) {
        self.mutate(|state| state.author_dialog = None);
    }

    pub async fn authors(&self) -> Result<Vec<get_authors::GetAuthorsAuthors>, QueryError> {
        let response = self.client.query(GetAuthors, get_authors::Variables).await?;
        Ok(response.data.map(|data| data.authors).unwrap_or_default())
    }

    pub async fn save_author(&self, draft: AuthorDraft) -> Result<(), QueryError> {
        match draft.id {
            None => {
                let variables = create_author::Variables {
                    author: create_author::AuthorInput { name: draft.name }
                };
                let options = QueryOptions {
                    extensions: Some(ext![
                        QueryCacheExtension::new().update::<CreateAuthor, _>(merge_created_author)
                    ]),
                    ..QueryOptions::default()
                };
                self.client
                    .query_with_options(CreateAuthor, variables, options)
                    .await?;
            }
            Some(author_id) => {
                let variables = update_author::Variables {
                    author_id,
                    author: update_author::AuthorInput { name: draft.name }
                };
                self.client.query(UpdateAuthor, variables).await?;
            }
        }
        self.close_author_dialog();
        Ok(())
    }
}

/// Patch the cached authors list with a just-created author. Same contract as
/// [merge_created_book](./fn.merge_created_book.html).
pub fn merge_created_author(
    data: &Option<create_author::ResponseData>,
    store: QueryStore,
    dependencies: &mut Dependencies
) {
    let created = match data {
        Some(data) => data.create_author.clone(),
        None => return
    };
    store.update_query(
        GetAuthors,
        get_authors::Variables,
        move |current| {
            let mut current = current?;
            if current.authors.iter().any(|author| author.id == created.id) {
                return None;
            }
            current.authors.push(get_authors::GetAuthorsAuthors {
                id: created.id,
                name: created.name
            });
            Some(current)
        },
        dependencies
    );
}
