use httpmock::prelude::*;
use httpmock::{
    Mock,
    Then,
    When,
};

use crate::constants::*;
use crate::objs::*;

type Handler = Box<dyn Fn(When, Then)>;

// A fake VCD control plane.  Handlers are collected first and registered with `build`, which
// also installs a catch-all that fails any request nobody planned for; otherwise httpmock's
// default 404 would look exactly like "entity not found" to the client and tests would pass
// for the wrong reason.
pub struct MockServerBuilder {
    server: MockServer,
    handlers: Vec<(Handler, usize)>,
    mock_ids: Vec<(usize, usize)>,
}

impl MockServerBuilder {
    pub fn new() -> MockServerBuilder {
        MockServerBuilder {
            server: MockServer::start(),
            handlers: vec![],
            mock_ids: vec![],
        }
    }

    pub fn base_url(&self) -> String {
        self.server.base_url()
    }

    pub fn assert(&self) {
        for (id, calls) in &self.mock_ids {
            println!("checking assertions for mock {id}");
            Mock::new(*id, &self.server).assert_calls(*calls);
        }
    }

    // Drops every handler (and its call-count expectations) so the same server can stand in for
    // the control plane after its state has changed
    pub fn reset(&mut self) -> &mut Self {
        self.server.reset();
        self.handlers.clear();
        self.mock_ids.clear();
        self
    }

    pub fn handle<F: Fn(When, Then) + 'static>(&mut self, f: F) -> &mut Self {
        self.handle_multiple(1, f)
    }

    pub fn handle_multiple<F: Fn(When, Then) + 'static>(&mut self, calls: usize, f: F) -> &mut Self {
        self.handlers.push((Box::new(f), calls));
        self
    }

    pub fn handle_error(&mut self, path: String, status: u16, message: &'static str) -> &mut Self {
        self.handle(move |when, then| {
            when.path(&path);
            then.status(status).json_body(vcd_error(status, message));
        })
    }

    pub fn handle_token(&mut self) -> &mut Self {
        self.handle(|when, then| {
            when.method(POST)
                .path(TENANT_TOKEN_PATH)
                .header("content-type", "application/x-www-form-urlencoded")
                .body_matches("grant_type=refresh_token&refresh_token=test-api-token");
            then.json_body(token_response());
        })
    }

    pub fn handle_org_lookup(&mut self) -> &mut Self {
        let base = self.base_url();
        self.handle(move |when, then| {
            when.method(GET)
                .path(ORG_LIST_PATH)
                .header("authorization", format!("Bearer {TEST_ACCESS_TOKEN}"));
            then.json_body(org_list(&base));
        });

        let base = self.base_url();
        self.handle(move |when, then| {
            when.method(GET).path(org_path());
            then.json_body(org(&base));
        })
    }

    pub fn handle_vdc(&mut self, calls: usize, with_vapp: bool) -> &mut Self {
        let base = self.base_url();
        self.handle_multiple(calls, move |when, then| {
            when.method(GET).path(vdc_path());
            then.json_body(vdc(&base, with_vapp));
        })
    }

    pub fn handle_vapp(&mut self, status: i32) -> &mut Self {
        let base = self.base_url();
        self.handle(move |when, then| {
            when.method(GET).path(vapp_path());
            then.json_body(vapp(&base, status));
        })
    }

    pub fn handle_vapp_delete(&mut self, task_status: &'static str) -> &mut Self {
        let base = self.base_url();
        self.handle(move |when, then| {
            when.method(DELETE).path(vapp_path());
            then.status(202).json_body(task(&base, task_status));
        })
    }

    pub fn handle_task(&mut self, calls: usize, task_status: &'static str) -> &mut Self {
        let base = self.base_url();
        self.handle_multiple(calls, move |when, then| {
            when.method(GET).path(task_path());
            then.json_body(task(&base, task_status));
        })
    }

    pub fn handle_rde_type(&mut self) -> &mut Self {
        self.handle(|when, then| {
            when.method(GET)
                .path(RDE_TYPES_PATH)
                .query_param("filter", "vendor==vmware;nss==capvcdCluster;version==1.3.0");
            then.json_body(rde_type_page());
        })
    }

    pub fn handle_rdes(&mut self, ids: &'static [&'static str]) -> &mut Self {
        self.handle(move |when, then| {
            when.method(GET)
                .path(CAPVCD_RDES_PATH)
                .query_param("filter", format!("name=={TEST_CLUSTER_NAME}"))
                .query_param("page", "1");
            if ids.is_empty() {
                then.json_body(empty_page());
            } else {
                then.json_body(rde_page(ids, 1, 1, ids.len()));
            }
        })
    }

    pub fn handle_rde_delete(&mut self, id: &'static str) -> &mut Self {
        self.handle(move |when, then| {
            when.method(DELETE).path(rde_path(id));
            then.status(204);
        })
    }

    pub fn build(&mut self) -> &mut Self {
        for (f, calls) in self.handlers.iter() {
            self.mock_ids.push((self.server.mock(f).id, *calls));
        }

        // This has to go last so that the other mock rules have a chance to match first
        self.server.mock(|_, then| {
            then.status(500).body("unexpected request to the fake control plane");
        });
        self
    }
}

impl Default for MockServerBuilder {
    fn default() -> MockServerBuilder {
        MockServerBuilder::new()
    }
}

pub fn make_fake_vcd() -> MockServerBuilder {
    MockServerBuilder::new()
}
