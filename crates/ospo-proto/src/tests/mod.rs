mod grpc_web;
