mod mock;

#[cfg(test)]
mod tests {
    use super::mock::{self, MockBoard, MockEngine, MockMesh};
    use dr1199_node::board::{Leds, Switch};
    use dr1199_node::config::NodeConfig;
    use dr1199_node::network::application::coap::handlers::{self, *};
    use dr1199_node::network::application::coap::{
        ContentBuffer, ContentFormat, Method, Request,
    };
    use dr1199_node::node::Node;
    use rand::Rng;

    const SWITCH_PATHS: [(Switch, &str); 5] = [
        (Switch::Dio8, SWITCH_DIO8),
        (Switch::Sw1, SWITCH_SW1),
        (Switch::Sw2, SWITCH_SW2),
        (Switch::Sw3, SWITCH_SW3),
        (Switch::Sw4, SWITCH_SW4),
    ];

    fn started_node() -> Node<MockEngine, MockMesh, MockBoard> {
        let mut node = Node::new(
            MockEngine::default(),
            MockMesh::default(),
            mock::board(),
            NodeConfig::default(),
        );
        node.start().unwrap();
        node
    }

    fn set_sensors(node: &mut Node<MockEngine, MockMesh, MockBoard>, switches: i32, pot: i32) {
        let board = node.peripherals_mut();
        board.button.value = switches;
        board.pot.value = pot;
    }

    #[test]
    fn test_switch_reports_its_own_bit() {
        let mut node = started_node();

        for (pressed, path) in SWITCH_PATHS {
            set_sensors(&mut node, 1 << pressed.bit(), 0);
            for (switch, other) in SWITCH_PATHS {
                let response = node.handle(&Request::new(Method::Get, other)).unwrap();
                let expected: &[u8] = if switch == pressed {
                    b"PRESSED"
                } else {
                    b"RELEASED"
                };
                assert_eq!(response.payload(), expected, "{} with {}", other, path);
                assert_eq!(response.content_format(), Some(ContentFormat::TEXT_PLAIN));
            }
        }
    }

    #[test]
    fn test_switches_against_random_bitmasks() {
        let mut node = started_node();
        let mut rng = rand::thread_rng();

        for _ in 0..64 {
            let mask: i32 = rng.gen_range(0..32);
            set_sensors(&mut node, mask, 0);
            for (switch, path) in SWITCH_PATHS {
                let response = node.handle(&Request::new(Method::Get, path)).unwrap();
                let pressed = mask & (1 << switch.bit()) != 0;
                assert_eq!(response.payload() == b"PRESSED", pressed);
            }
        }
    }

    #[test]
    fn test_switch_rejects_json() {
        let mut node = started_node();
        set_sensors(&mut node, 0x1F, 0);

        let request =
            Request::new(Method::Get, SWITCH_SW1).with_accept(ContentFormat::APPLICATION_JSON);
        let response = node.handle(&request).unwrap();
        assert!(response.is_unset());

        let request = Request::new(Method::Get, SWITCH_SW1).with_accept(ContentFormat::TEXT_PLAIN);
        let response = node.handle(&request).unwrap();
        assert_eq!(response.payload(), b"PRESSED");
    }

    #[test]
    fn test_potentiometer_plain_text() {
        let mut node = started_node();
        set_sensors(&mut node, 0, 512);

        let response = node.handle(&Request::new(Method::Get, POTENTIOMETER)).unwrap();
        assert_eq!(response.payload(), b"512");
        assert_eq!(response.content_format(), Some(ContentFormat::TEXT_PLAIN));

        set_sensors(&mut node, 0, -12);
        let response = node.handle(&Request::new(Method::Get, POTENTIOMETER)).unwrap();
        assert_eq!(response.payload(), b"-12");

        let request =
            Request::new(Method::Get, POTENTIOMETER).with_accept(ContentFormat::APPLICATION_JSON);
        assert!(node.handle(&request).unwrap().is_unset());
    }

    #[test]
    fn test_all_sensors_json() {
        let mut node = started_node();
        set_sensors(&mut node, 0x1A, 783);

        let request =
            Request::new(Method::Get, ALL_SENSORS).with_accept(ContentFormat::APPLICATION_JSON);
        let response = node.handle(&request).unwrap();
        assert_eq!(
            response.payload(),
            br#"{"DR1199":[{"Switch":"0x1A"},{"Pot":"783"}]}"#
        );
        assert_eq!(
            response.content_format(),
            Some(ContentFormat::APPLICATION_JSON)
        );

        // no preference also gets JSON
        let response = node.handle(&Request::new(Method::Get, ALL_SENSORS)).unwrap();
        assert_eq!(
            response.payload(),
            br#"{"DR1199":[{"Switch":"0x1A"},{"Pot":"783"}]}"#
        );
    }

    #[test]
    fn test_all_sensors_does_not_negotiate_text() {
        let mut node = started_node();
        set_sensors(&mut node, 0x1A, 783);

        let request = Request::new(Method::Get, ALL_SENSORS).with_accept(ContentFormat::TEXT_PLAIN);
        let response = node.handle(&request).unwrap();
        assert!(response.is_unset());
        assert_eq!(response.payload(), b"");
    }

    #[test]
    fn test_all_sensors_reflects_live_values() {
        let mut node = started_node();

        set_sensors(&mut node, 0x0, 0);
        let first = node.handle(&Request::new(Method::Get, ALL_SENSORS)).unwrap();
        set_sensors(&mut node, 0x10, 99);
        let second = node.handle(&Request::new(Method::Get, ALL_SENSORS)).unwrap();

        assert_eq!(first.payload(), br#"{"DR1199":[{"Switch":"0x0"},{"Pot":"0"}]}"#);
        assert_eq!(second.payload(), br#"{"DR1199":[{"Switch":"0x10"},{"Pot":"99"}]}"#);
    }

    #[test]
    fn test_led_d1_commands() {
        let mut node = started_node();
        let put = |body: &'static [u8]| Request::new(Method::Put, LED_D1).with_payload(body);

        let response = node.handle(&put(b"1")).unwrap();
        assert!(response.is_unset());
        assert!(node.peripherals().leds.is_on(Leds::GREEN));

        node.handle(&put(b"0")).unwrap();
        assert!(!node.peripherals().leds.is_on(Leds::GREEN));

        node.handle(&put(b"1")).unwrap();
        node.handle(&put(b"abc")).unwrap();
        assert!(!node.peripherals().leds.is_on(Leds::GREEN));
        assert_eq!(node.peripherals().leds.calls.last(), Some(&(false, Leds::GREEN)));
    }

    #[test]
    fn test_led_post_behaves_like_put() {
        let mut node = started_node();
        let post = Request::new(Method::Post, LED_D2).with_payload(b"7");
        node.handle(&post).unwrap();
        assert!(node.peripherals().leds.is_on(Leds::BLUE));
        assert_eq!(node.peripherals().leds.lit, Leds::BLUE.bits());
    }

    #[test]
    fn test_each_led_resource_drives_its_output() {
        let cases = [
            (LED_D1, Leds::GREEN),
            (LED_D2, Leds::BLUE),
            (LED_D3, Leds::RED),
            (LED_D3_ON_1174, Leds::GP0),
            (LED_D6_ON_1174, Leds::GP1),
        ];

        for (path, leds) in cases {
            let mut node = started_node();
            node.handle(&Request::new(Method::Put, path).with_payload(b"1"))
                .unwrap();
            assert_eq!(node.peripherals().leds.lit, leds.bits(), "{}", path);

            node.handle(&Request::new(Method::Put, path).with_payload(b"0"))
                .unwrap();
            assert_eq!(node.peripherals().leds.lit, 0, "{}", path);
        }
    }

    #[test]
    fn test_led_all() {
        let mut node = started_node();

        node.handle(&Request::new(Method::Put, LED_ALL).with_payload(b"5"))
            .unwrap();
        assert_eq!(node.peripherals().leds.lit, Leds::ALL.bits());
        assert!(node.peripherals().leds.is_on(Leds::GREEN | Leds::GP1));

        node.handle(&Request::new(Method::Put, LED_ALL).with_payload(b"0"))
            .unwrap();
        assert_eq!(node.peripherals().leds.lit, 0);
    }

    #[test]
    fn test_led_ignores_non_text_accept() {
        let mut node = started_node();
        let request = Request::new(Method::Put, LED_D3)
            .with_payload(b"1")
            .with_accept(ContentFormat::APPLICATION_JSON);
        node.handle(&request).unwrap();
        assert!(node.peripherals().leds.calls.is_empty());
    }

    #[test]
    fn test_led_empty_body_switches_off() {
        let mut node = started_node();
        node.handle(&Request::new(Method::Put, LED_D3).with_payload(b"1"))
            .unwrap();
        node.handle(&Request::new(Method::Put, LED_D3)).unwrap();
        assert!(!node.peripherals().leds.is_on(Leds::RED));
    }

    #[test]
    fn test_link_format_discovery() {
        let table = handlers::resource_table().unwrap();
        let mut out: ContentBuffer<1024> = ContentBuffer::new();
        table.link_format(&mut out);
        let text = core::str::from_utf8(out.as_bytes()).unwrap();

        assert!(text.starts_with(r#"</DR1199/Switch/SW1>;title="SW1",</DR1199/Switch/SW2>"#));
        assert!(text.contains(r#"</DR1199/LED/D3On1174>;title="LED D3 1174<[0,1]>""#));
        assert!(text.ends_with(r#"</DR1199/AllSensors>;obs;title="All_DR1199_sensors""#));
        assert_eq!(text.matches("</").count(), 13);
    }

    #[test]
    fn test_link_format_truncates() {
        let table = handlers::resource_table().unwrap();
        let mut out: ContentBuffer = ContentBuffer::new();
        table.link_format(&mut out);
        assert_eq!(out.len(), out.capacity());
        assert!(out.as_bytes().starts_with(b"</DR1199/Switch/SW1>"));
    }
}
