use pinpoint::config::LookupProfile;
use pinpoint::{HttpPincodeDirectory, LookupController};
use serde_json::{json, Value};
use std::fmt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Scenario state: a mock postal directory and the real lookup controller
/// pointed at it
#[derive(cucumber::World)]
#[world(init = Self::new)]
pub struct LookupWorld {
    /// Mock postal directory
    pub server: Option<MockServer>,

    /// Real controller talking HTTP to `server`
    pub controller: Option<LookupController<HttpPincodeDirectory>>,
}

impl fmt::Debug for LookupWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupWorld")
            .field("server", &self.server.as_ref().map(|s| s.uri()))
            .field("state", &self.controller.as_ref().map(|c| c.state()))
            .finish()
    }
}

impl LookupWorld {
    pub fn new() -> Self {
        Self {
            server: None,
            controller: None,
        }
    }

    /// Start the mock directory and build a controller against it
    pub async fn start_directory(&mut self) {
        let server = MockServer::start().await;
        let profile = LookupProfile::with_base_url(server.uri());
        let directory =
            HttpPincodeDirectory::new(&profile).expect("Failed to create directory client");
        self.controller = Some(LookupController::new(directory));
        self.server = Some(server);
    }

    pub fn server(&self) -> &MockServer {
        self.server
            .as_ref()
            .expect("The postal directory has not been started")
    }

    pub fn controller(&mut self) -> &mut LookupController<HttpPincodeDirectory> {
        self.controller
            .as_mut()
            .expect("The postal directory has not been started")
    }

    /// Answer lookups for `code` with `status` and a JSON body
    pub async fn mount_reply(&self, code: &str, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/pincode/{code}")))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(self.server())
            .await;
    }

    /// Answer lookups for `code` with raw text
    pub async fn mount_raw_reply(&self, code: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/pincode/{code}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(self.server())
            .await;
    }

    /// Success envelope listing `names` as Delhi sub post offices
    pub fn success_body(names: &[&str]) -> Value {
        let offices: Vec<Value> = names
            .iter()
            .map(|name| {
                json!({
                    "Name": name,
                    "Description": null,
                    "BranchType": "Sub Post Office",
                    "DeliveryStatus": "Delivery",
                    "Circle": "Delhi",
                    "District": "Central Delhi",
                    "Division": "New Delhi Central",
                    "Region": "Delhi",
                    "Block": "New Delhi",
                    "State": "Delhi",
                    "Country": "India",
                    "Pincode": "110001"
                })
            })
            .collect();
        json!([{
            "Message": format!("Number of pincode(s) found:{}", offices.len()),
            "Status": "Success",
            "PostOffice": offices
        }])
    }
}

impl Default for LookupWorld {
    fn default() -> Self {
        Self::new()
    }
}
