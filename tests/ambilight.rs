use std::sync::{Arc, Mutex};

use ambictl::api::client::TvClient;
use ambictl::config::TvConfig;
use ambictl::models::channel::Channel;
use ambictl::models::command::{Command, HsbColor, OnOff, Percent, State};
use ambictl::service::ambilight::AmbilightService;
use ambictl::service::{ThingHandler, ThingStatus, ThingStatusDetail, TvService};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct Recorder {
    channels: Mutex<Vec<(Channel, State)>>,
    things: Mutex<Vec<(ThingStatus, ThingStatusDetail)>>,
}

impl ThingHandler for Recorder {
    fn post_update_channel(&self, channel: Channel, state: State) {
        self.channels.lock().unwrap().push((channel, state));
    }

    fn post_update_thing(&self, status: ThingStatus, detail: ThingStatusDetail, _message: &str) {
        self.things.lock().unwrap().push((status, detail));
    }
}

fn ambilight_for(uri: &str) -> (AmbilightService, Arc<Recorder>) {
    let config = TvConfig::resolve(Some(uri), None, 5).unwrap();
    let connection = Arc::new(TvClient::new(&config).unwrap());
    let recorder = Arc::new(Recorder::default());
    (AmbilightService::new(recorder.clone(), connection), recorder)
}

#[tokio::test]
async fn test_side_colors_fetch_topology_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/6/ambilight/topology"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"layers": 1, "left": 2, "top": 3, "right": 2, "bottom": 0}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/6/ambilight/mode"))
        .and(body_json(json!({"current": "manual"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let blue = json!({"r": 0, "g": 0, "b": 100});
    Mock::given(method("POST"))
        .and(path("/6/ambilight/cached"))
        .and(body_json(
            json!({"layer1": {"top": {"0": blue, "1": blue, "2": blue}}}),
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/6/ambilight/cached"))
        .and(body_json(json!({"layer1": {"left": {"0": blue, "1": blue}}})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (ambilight, recorder) = ambilight_for(&server.uri());
    let color = Command::Hsb(HsbColor::new(240, 100, 100).unwrap());
    ambilight
        .handle_command("ambilightTopColor", color.clone())
        .await;
    ambilight.handle_command("ambilightLeftColor", color).await;

    assert!(recorder.things.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_brightness_posts_settings_update() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/6/menuitems/settings/update"))
        .and(body_json(json!({"values": [{"value": {
            "Nodeid": 2131230769,
            "Controllable": "true",
            "Available": "true",
            "data": {"value": 5}
        }}]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (ambilight, _) = ambilight_for(&server.uri());
    ambilight
        .execute(Channel::Color, Command::Percent(Percent::new(55).unwrap()))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_reads_without_writing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/6/ambilight/power"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"power": "Off"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/6/ambilight/currentconfiguration"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"styleName": "FOLLOW_VIDEO", "isExpert": false, "menuSetting": "VIVID"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (ambilight, recorder) = ambilight_for(&server.uri());
    for channel in Channel::ALL {
        ambilight.handle_command(channel.id(), Command::Refresh).await;
    }

    assert_eq!(
        *recorder.channels.lock().unwrap(),
        vec![
            (Channel::Power, State::OnOff(OnOff::Off)),
            (Channel::Style, State::String("FOLLOW_VIDEO VIVID".into())),
        ]
    );
}

#[tokio::test]
async fn test_rejected_session_marks_communication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (ambilight, recorder) = ambilight_for(&server.uri());
    ambilight
        .handle_command("ambilightHuePower", Command::OnOff(OnOff::Off))
        .await;

    assert_eq!(
        *recorder.things.lock().unwrap(),
        vec![(ThingStatus::Offline, ThingStatusDetail::CommunicationError)]
    );
}
