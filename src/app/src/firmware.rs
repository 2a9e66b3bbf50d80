//! Reference firmware sketch.
//!
//! The shell's code panel renders this verbatim, with a copy button, so a
//! user can flash a device that satisfies the HTTP contract this core
//! expects: `/` for probes, `/on` and `/off` answering 2xx plain text with
//! `Access-Control-Allow-Origin: *`.

pub const SETUP_SKETCH: &str = r#"#include <ESP8266WiFi.h>
#include <ESP8266WebServer.h>

// Replace with your network credentials
const char* ssid = "YOUR_ROUTER_SSID";
const char* password = "YOUR_ROUTER_PASSWORD";

ESP8266WebServer server(80);

const int ledPin = LED_BUILTIN; // GPIO 2 on most ESP8266

void handleRoot() {
  server.sendHeader("Access-Control-Allow-Origin", "*");
  server.send(200, "text/plain", "ESP8266 LED Server is running!");
}

void handleLedOn() {
  digitalWrite(ledPin, LOW); // Built-in LED is Active Low
  server.sendHeader("Access-Control-Allow-Origin", "*");
  server.send(200, "text/plain", "LED IS ON");
}

void handleLedOff() {
  digitalWrite(ledPin, HIGH); // Built-in LED is Active Low
  server.sendHeader("Access-Control-Allow-Origin", "*");
  server.send(200, "text/plain", "LED IS OFF");
}

void setup() {
  Serial.begin(115200);
  pinMode(ledPin, OUTPUT);
  digitalWrite(ledPin, HIGH); // Start with LED off

  WiFi.begin(ssid, password);
  Serial.print("Connecting to WiFi");
  while (WiFi.status() != WL_CONNECTED) {
    delay(500);
    Serial.print(".");
  }

  Serial.println("");
  Serial.println("WiFi connected");
  Serial.print("IP address: ");
  Serial.println(WiFi.localIP());

  server.on("/", handleRoot);
  server.on("/on", handleLedOn);
  server.on("/off", handleLedOff);

  server.begin();
  Serial.println("HTTP server started");
}

void loop() {
  server.handleClient();
}"#;
