//! TCP sockets opened by the script

use surface_sdk::{wrapper_class, HostCallback, HostResult, Wrapper, API_PROXY};

wrapper_class! {
    /// A listening socket created with `Host::create_remote_connection`.
    pub struct RemoteSocket: REMOTE_SOCKET extends API_PROXY {}
}

wrapper_class! {
    /// A client connection accepted by a `RemoteSocket`.
    ///
    /// The host passes connections to the connect callback as raw objects;
    /// wrap them with `RemoteConnection::wrap`.
    pub struct RemoteConnection: REMOTE_CONNECTION extends API_PROXY {}
}

impl RemoteSocket {
    /// Port the socket listens on
    pub fn port(&self) -> HostResult<i64> {
        self.proxy().call_as("getPort", &[])
    }

    /// Receive each accepted connection
    pub fn set_client_connect_callback(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("setClientConnectCallback", &[callback.into()])
    }
}

impl RemoteConnection {
    /// Close the connection
    pub fn disconnect(&self) -> HostResult<()> {
        self.proxy().call_void("disconnect", &[])
    }

    /// Send bytes to the client. Bytes go to the host as signed values.
    pub fn send(&self, data: &[u8]) -> HostResult<()> {
        let bytes: Vec<i64> = data.iter().map(|&b| i64::from(b as i8)).collect();
        self.proxy().call_void("send", &[bytes.into()])
    }

    /// Be told when the client disconnects
    pub fn set_disconnect_callback(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("setDisconnectCallback", &[callback.into()])
    }

    /// Receive data sent by the client
    pub fn set_receive_callback(&self, callback: HostCallback) -> HostResult<()> {
        self.proxy()
            .call_void("setReceiveCallback", &[callback.into()])
    }
}
